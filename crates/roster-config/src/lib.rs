//! # Roster Config
//!
//! Configuration types for the Roster API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret, issuer/audience, expiry and validation mode
//! - [`store`]: user id allocation strategy
//! - [`server`]: bind address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`logging`]: log level and output format
//!
//! Every struct exposes `from_env()` plus a `from_lookup()` variant that takes
//! the variable source as a closure, so parsing can be exercised without
//! touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use roster_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

use std::str::FromStr;

use anyhow::{Context, Result};

pub mod cors;
pub mod jwt;
pub mod logging;
pub mod server;
pub mod store;

pub use cors::CorsConfig;
pub use jwt::{JwtConfig, TokenValidation};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use store::{IdAllocation, StoreConfig};

/// Reads `key` through `lookup` and parses it, falling back to `default` when unset.
pub(crate) fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
