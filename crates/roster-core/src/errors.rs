//! Application error type and its HTTP rendering.
//!
//! Every handler and middleware in the API returns [`AppError`] on failure.
//! The error carries the HTTP status, the underlying [`anyhow::Error`] and the
//! shape of the body sent to the client:
//!
//! | Constructor | Status | Body |
//! |---|---|---|
//! | [`AppError::unauthorized`] | 401 | empty, `WWW-Authenticate: Bearer` |
//! | [`AppError::validation`] | 400 | list of [`ValidationProblem`] |
//! | [`AppError::bad_request`] | 400 | [`ProblemDetails`] |
//! | [`AppError::not_found`] | 404 | JSON string message |
//! | [`AppError::not_found_empty`] | 404 | empty |
//! | [`AppError::internal`] | 500 | [`ProblemDetails`] |

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Title used for problem details produced by unhandled faults.
pub const INTERNAL_ERROR_TITLE: &str = "An error occurred";

/// RFC 7807 style error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        let title = if status == StatusCode::INTERNAL_SERVER_ERROR {
            INTERNAL_ERROR_TITLE.to_string()
        } else {
            status
                .canonical_reason()
                .unwrap_or(INTERNAL_ERROR_TITLE)
                .to_string()
        };

        Self {
            title,
            status: status.as_u16(),
            detail: Some(detail.into()),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// A single violated validation constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationProblem {
    pub member_names: Vec<String>,
    pub error_message: String,
}

/// How an [`AppError`] is rendered to the client.
#[derive(Debug)]
pub enum ErrorBody {
    Problem,
    Message,
    Empty,
    Challenge,
    Validation(Vec<ValidationProblem>),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub body: ErrorBody,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            body: ErrorBody::Problem,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// 404 whose body is the error message as a JSON string.
    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status: StatusCode::NOT_FOUND,
            error: err.into(),
            body: ErrorBody::Message,
        }
    }

    /// 404 with no body.
    pub fn not_found_empty() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: anyhow!("Resource not found"),
            body: ErrorBody::Empty,
        }
    }

    /// 401 with a bearer challenge. The reason is logged, never sent.
    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: err.into(),
            body: ErrorBody::Challenge,
        }
    }

    pub fn validation(problems: Vec<ValidationProblem>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: anyhow!("{} validation error(s)", problems.len()),
            body: ErrorBody::Validation(problems),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = ?self.error, "An unhandled exception has occurred");
        }

        match self.body {
            ErrorBody::Problem => {
                ProblemDetails::new(self.status, self.error.to_string()).into_response()
            }
            ErrorBody::Message => (self.status, Json(self.error.to_string())).into_response(),
            ErrorBody::Empty => self.status.into_response(),
            ErrorBody::Challenge => {
                tracing::debug!(reason = %self.error, "Rejected unauthenticated request");
                (self.status, [(header::WWW_AUTHENTICATE, "Bearer")]).into_response()
            }
            ErrorBody::Validation(problems) => (self.status, Json(problems)).into_response(),
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
