//! Conversion of handler panics into 500 responses.
//!
//! Wired into the router through `tower_http::catch_panic::CatchPanicLayer::custom`.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::ProblemDetails;

/// Extracts the panic payload message, if it is a string.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "Unknown panic message".to_string()
    }
}

pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_message(payload.as_ref());
    tracing::error!(panic = %detail, "An unhandled exception has occurred");

    ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, detail).into_response()
}
