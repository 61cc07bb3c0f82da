//! # Roster Auth
//!
//! Bearer token utilities for the Roster API.
//!
//! - [`claims`]: the JWT claim set
//! - [`jwt`]: token issuing and verification
//!
//! Tokens are HS256-signed with the shared secret from
//! [`roster_config::JwtConfig`]. How much of the token is checked on the way
//! back in is governed by [`roster_config::TokenValidation`].
//!
//! # Example
//!
//! ```ignore
//! use roster_auth::{issue_token, verify_token};
//! use roster_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token(&config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "testuser");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Audience, Claims, TOKEN_SUBJECT};
pub use jwt::{issue_token, verify_token};
