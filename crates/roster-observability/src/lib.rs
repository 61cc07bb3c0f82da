//! Roster Observability Module
//!
//! - [`logging::init_tracing`]: installs the global `tracing` subscriber
//! - [`logging::logging_middleware`]: per-request method/path/status logging
//!
//! # Examples
//!
//! ```no_run
//! use roster_config::LoggingConfig;
//! use roster_observability::init_tracing;
//!
//! let config = LoggingConfig::from_env().unwrap();
//! init_tracing(&config);
//! ```

pub mod logging;

pub use logging::{init_tracing, logging_middleware};
