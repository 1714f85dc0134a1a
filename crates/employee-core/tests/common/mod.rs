//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use employee_core::{Employee, EmployeeQuery, filter_employees};

/// Names of the records visible under `query`, in order
pub fn visible_names(employees: &[Employee], query: &EmployeeQuery) -> Vec<String> {
    filter_employees(employees, query)
        .into_iter()
        .map(|e| e.name)
        .collect()
}
