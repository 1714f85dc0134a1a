//! Employee Dashboard Web Interface
//!
//! Client-side rendered Leptos application for browsing employee records,
//! compiled to WebAssembly and served as a static bundle.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod pages;

// Re-export the root component
pub use app::App;
