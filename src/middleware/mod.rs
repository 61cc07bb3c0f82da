//! Middleware modules for request processing.
//!
//! - [`auth`]: bearer token extractor and the `/users` authentication layer
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::require_auth`] verifies the token signature (and, in strict
//!    mode, its issuer, audience and expiry)
//! 3. On failure the chain stops with 401; the handler never runs
//! 4. On success the verified [`auth::AuthUser`] is stored in the request
//!    extensions and the handler executes

pub mod auth;
