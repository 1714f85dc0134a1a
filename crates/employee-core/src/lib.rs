//! Domain model and view logic for the employee admin dashboard
//!
//! Everything here is plain data and pure functions so it can be shared by
//! the browser app and exercised by native tests.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod analytics;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod filter;
pub mod load;
pub mod routes;
pub mod settings;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use filter::{DepartmentFilter, EmployeeQuery, departments, filter_employees};
pub use load::{EmployeeSource, LoadNotice, LoadState};
pub use routes::AppRoute;
pub use settings::{SettingToggle, SettingsForm};
pub use types::{Employee, EmployeeId, EmployeeStatus};
