//! Token issuing endpoint.

pub mod controller;
pub mod router;
