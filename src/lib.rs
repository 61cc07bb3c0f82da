//! # Roster API
//!
//! A small REST API built with Rust and Axum that keeps user records in
//! memory and guards them with HS256 bearer tokens.
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Result |
//! |--------|------|------|--------|
//! | POST | `/generate-token` | no | 200 `{ "Token": "..." }` |
//! | GET | `/users` | yes | 200 list |
//! | GET | `/users/{id}` | yes | 200 user, 404 message |
//! | POST | `/users` | yes | 201 + `Location`, 400 validation errors |
//! | PUT | `/users/{id}` | yes | 204, 404, 400 validation errors |
//! | DELETE | `/users/{id}` | yes | 204, 404 |
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer token authentication layer
//! ├── modules/
//! │   ├── auth/        # Token issuing
//! │   └── users/       # User CRUD (controller, service, router)
//! ├── router.rs        # Route table and interceptor chain
//! ├── state.rs         # Shared application state
//! └── validator.rs     # JSON extractors and validation error mapping
//! crates/
//! ├── roster-core/          # AppError, problem details, panic recovery
//! ├── roster-config/        # Environment-driven configuration
//! ├── roster-auth/          # Claims, token issuing and verification
//! ├── roster-models/        # User, UserDto, TokenResponse
//! ├── roster-store/         # In-memory user store
//! └── roster-observability/ # Subscriber setup and request logging
//! ```
//!
//! ## Request Pipeline
//!
//! Outermost first: request logging → CORS → panic guard → router. Routes
//! under `/users` add the authentication layer, which answers 401 before the
//! handler runs.
//!
//! ## Quick Start
//!
//! ```bash
//! SECRET_KEY=a-secret-of-at-least-thirty-two-bytes cargo run
//! TOKEN=$(curl -s -X POST localhost:3000/generate-token | jq -r .Token)
//! curl -H "Authorization: Bearer $TOKEN" localhost:3000/users
//! ```
//!
//! ## Security Considerations
//!
//! - By default only the token signature is checked; set
//!   `JWT_VALIDATION=strict` to also enforce expiry, issuer and audience
//! - Unhandled faults echo their message in the 500 `Detail` field

pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use roster_auth;
pub use roster_config;
pub use roster_core;
pub use roster_models;
pub use roster_store;
