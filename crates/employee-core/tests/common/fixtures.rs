//! Test fixtures and sample data

use chrono::NaiveDate;
use employee_core::{Employee, EmployeeStatus};

/// Builder for employee records not in the fixed dataset
pub struct EmployeeFixture {
    employee: Employee,
}

impl EmployeeFixture {
    /// Minimal valid record
    pub fn new(id: u32, name: &str, department: &str) -> Self {
        let handle = name.to_lowercase().replace(' ', ".");
        Self {
            employee: Employee {
                id,
                name: name.to_string(),
                email: format!("{handle}@example.org"),
                phone: "+1 (555) 000-0000".to_string(),
                department: department.to_string(),
                position: "Associate".to_string(),
                location: "Remote".to_string(),
                join_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap_or_default(),
                status: EmployeeStatus::Active,
            },
        }
    }

    /// Override the email
    pub fn email(mut self, email: &str) -> Self {
        self.employee.email = email.to_string();
        self
    }

    /// Mark inactive
    pub fn inactive(mut self) -> Self {
        self.employee.status = EmployeeStatus::Inactive;
        self
    }

    /// Finish the record
    pub fn build(self) -> Employee {
        self.employee
    }
}

/// Larger roster mixing casing and overlapping departments
pub fn mixed_roster() -> Vec<Employee> {
    vec![
        EmployeeFixture::new(10, "Ada Lovelace", "Engineering").build(),
        EmployeeFixture::new(11, "Grace HOPPER", "engineering").build(),
        EmployeeFixture::new(12, "Alan Turing", "Research")
            .email("alan@engineering.example.org")
            .build(),
        EmployeeFixture::new(13, "Joan Clarke", "Research").inactive().build(),
        EmployeeFixture::new(14, "Tommy Flowers", "Engineering").build(),
    ]
}
