//! # Roster Models
//!
//! Domain models and DTOs for the Roster API.
//!
//! - [`users`]: the [`User`] record and the [`UserDto`] accepted on writes
//! - [`auth`]: the token issuing response
//!
//! All JSON field names are PascalCase on the wire (`FirstName`, `Token`, ...).
//!
//! # Example
//!
//! ```ignore
//! use roster_models::{User, UserDto};
//! use validator::Validate;
//!
//! let dto: UserDto = serde_json::from_str(r#"{"FirstName":"Ada","LastName":"Lovelace","Email":"ada@example.com"}"#)?;
//! dto.validate()?;
//! let user = User::from_dto(1, dto);
//! ```

pub mod auth;
pub mod de;
pub mod users;

pub use auth::TokenResponse;
pub use users::{User, UserDto};
