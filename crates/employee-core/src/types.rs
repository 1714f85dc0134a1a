//! Core data types for the employee dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;

/// Employee identifier type
pub type EmployeeId = u32;

/// Employment status of a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed
    #[default]
    Active,
    /// No longer active
    Inactive,
}

impl EmployeeStatus {
    /// Lowercase label shown on the status badge
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Whether the badge uses the primary (filled) style
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(crate::Error::validation(
                "status",
                format!("unknown value '{other}'"),
            )),
        }
    }
}

/// A single employee record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,

    /// Full name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Work email address
    #[validate(email)]
    pub email: String,

    /// Phone number, display formatted
    #[validate(length(min = 1, max = 64))]
    pub phone: String,

    /// Department label
    #[validate(length(min = 1, max = 100))]
    pub department: String,

    /// Job title
    #[validate(length(min = 1, max = 255))]
    pub position: String,

    /// Office location
    #[validate(length(max = 255))]
    pub location: String,

    /// Date the employee joined
    pub join_date: NaiveDate,

    /// Employment status
    pub status: EmployeeStatus,
}

impl Employee {
    /// Join date formatted for the employee card
    #[must_use]
    pub fn joined_label(&self) -> String {
        format!("Joined: {}", self.join_date.format("%m/%d/%Y"))
    }

    /// Check the record's field constraints
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn check(&self) -> crate::Result<()> {
        self.validate().map_err(crate::Error::from)
    }
}
