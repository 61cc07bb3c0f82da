//! # Roster Core
//!
//! Core error types for the Roster API.
//!
//! - [`errors`]: [`AppError`] and the JSON bodies it renders
//! - [`recover`]: turning handler panics into problem-details responses
//!
//! # Example
//!
//! ```ignore
//! use roster_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("User with id 3, was not found!"));
//! ```

pub mod errors;
pub mod recover;

pub use errors::{AppError, ErrorBody, ProblemDetails, ValidationProblem};
pub use recover::panic_response;
