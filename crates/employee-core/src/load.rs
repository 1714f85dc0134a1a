//! Simulated asynchronous load of the employee list
//!
//! The list view starts in [`LoadState::Loading`]. When the caller's one-shot
//! timer fires after [`EmployeeSource::delay`], it feeds
//! [`EmployeeSource::fetch`] into [`LoadState::complete`]. The state never
//! returns to loading and later completions are ignored.

use crate::types::Employee;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Delay before the mock dataset becomes available
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Loading/loaded state of a one-shot data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Waiting for the source
    Loading,
    /// Data is available
    Loaded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// True until the first completion
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded value, if any
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Loaded(value) => Some(value),
        }
    }

    /// Move from loading to loaded
    ///
    /// Returns `false` and drops `value` when already loaded.
    pub fn complete(&mut self, value: T) -> bool {
        if self.is_loading() {
            *self = Self::Loaded(value);
            true
        } else {
            false
        }
    }
}

/// Mock employee source standing in for a real API call
#[derive(Debug, Clone)]
pub struct EmployeeSource {
    delay: Duration,
    employees: Vec<Employee>,
}

impl Default for EmployeeSource {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_DELAY, crate::data::employees().to_vec())
    }
}

impl EmployeeSource {
    /// Create a source serving `employees` after `delay`
    #[must_use]
    pub fn new(delay: Duration, employees: Vec<Employee>) -> Self {
        Self { delay, employees }
    }

    /// Replace the delay
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// How long the caller should wait before calling [`Self::fetch`]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Snapshot of the dataset
    #[must_use]
    pub fn fetch(&self) -> Vec<Employee> {
        debug!(count = self.employees.len(), "Serving employee snapshot");
        self.employees.clone()
    }
}

/// Toast shown once the list has loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadNotice {
    /// Toast heading
    pub title: String,
    /// Toast body
    pub description: String,
}

impl LoadNotice {
    /// Notice for a completed employee load
    #[must_use]
    pub fn employees_loaded(count: usize) -> Self {
        Self {
            title: "Employees loaded".to_string(),
            description: format!("Successfully loaded {count} employees"),
        }
    }
}
