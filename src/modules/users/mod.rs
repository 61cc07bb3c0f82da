//! CRUD over the in-memory user store.
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: store access, validation ordering, not-found mapping
//! - `router.rs`: `/users` routes

pub mod controller;
pub mod router;
pub mod service;
