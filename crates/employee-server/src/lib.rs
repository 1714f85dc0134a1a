//! Preview server for the employee dashboard
//!
//! Serves the compiled single-page bundle with client-side route fallback
//! and a health endpoint.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

// Re-export commonly used types
pub use config::{Config, LogFormat, Overrides};
pub use error::{Result, ServerError};
pub use logging::init_logging;
pub use routes::build_router;
