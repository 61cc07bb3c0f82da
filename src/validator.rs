//! JSON body extractors and validation error mapping.
//!
//! - [`JsonBody`] parses a JSON body, turning every parse failure into a 400
//!   problem-details response.
//! - [`ValidatedJson`] does the same and then runs the `validator` rules,
//!   answering 400 with the full list of violations.
//! - [`validate_payload`] runs the rules on an already parsed value, for
//!   handlers that must check something else first.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use roster_core::{AppError, ValidationProblem};
use roster_models::UserDto;

/// `first_name` -> `FirstName`. Already PascalCase names pass through unchanged.
fn member_name(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Member names of a payload in declaration order. Validation errors are
/// reported in this order; members not listed sort after the rest by name.
pub trait MemberOrder {
    const MEMBERS: &'static [&'static str] = &[];
}

impl MemberOrder for UserDto {
    const MEMBERS: &'static [&'static str] = &["FirstName", "LastName", "Email", "Department"];
}

/// Flattens `errors` into one entry per violated rule, ordered by the position
/// of each member in `order`.
pub fn validation_problems(errors: &ValidationErrors, order: &[&str]) -> Vec<ValidationProblem> {
    let mut problems: Vec<ValidationProblem> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            let member = member_name(field);
            errors.iter().map(move |error| ValidationProblem {
                member_names: vec![member.clone()],
                error_message: error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("The {member} field is invalid.")),
            })
        })
        .collect();

    let rank = |problem: &ValidationProblem| {
        problem
            .member_names
            .first()
            .and_then(|member| order.iter().position(|m| *m == member.as_str()))
            .unwrap_or(usize::MAX)
    };
    problems.sort_by(|a, b| {
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.member_names.cmp(&b.member_names))
            .then_with(|| a.error_message.cmp(&b.error_message))
    });
    problems
}

pub fn validate_payload<T: Validate + MemberOrder>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::validation(validation_problems(&errors, T::MEMBERS)))
}

fn map_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request(anyhow!("Missing 'Content-Type: application/json' header"))
        }
        JsonRejection::JsonSyntaxError(_) => {
            AppError::bad_request(anyhow!("Malformed JSON in request body"))
        }
        JsonRejection::JsonDataError(err) => {
            AppError::bad_request(anyhow!("Invalid field type in request: {}", err.body_text()))
        }
        other => AppError::bad_request(anyhow!("Invalid request body: {}", other.body_text())),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(map_rejection)?;

        Ok(JsonBody(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + MemberOrder,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        validate_payload(&value)?;
        Ok(ValidatedJson(value))
    }
}
