//! Page components for the web interface

pub mod analytics;
pub mod dashboard;
pub mod employees;
pub mod not_found;
pub mod settings;
