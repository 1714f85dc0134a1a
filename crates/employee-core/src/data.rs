//! Fixed employee dataset served by the simulated loader

use crate::types::{Employee, EmployeeStatus};
use chrono::NaiveDate;
use std::sync::LazyLock;

static EMPLOYEES: LazyLock<Vec<Employee>> = LazyLock::new(|| {
    vec![
        Employee {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            department: "Engineering".to_string(),
            position: "Senior Software Engineer".to_string(),
            location: "New York, NY".to_string(),
            join_date: date(2022, 1, 15),
            status: EmployeeStatus::Active,
        },
        Employee {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@company.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            department: "Marketing".to_string(),
            position: "Marketing Manager".to_string(),
            location: "Los Angeles, CA".to_string(),
            join_date: date(2021, 11, 20),
            status: EmployeeStatus::Active,
        },
        Employee {
            id: 3,
            name: "Mike Johnson".to_string(),
            email: "mike.johnson@company.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            department: "HR".to_string(),
            position: "HR Specialist".to_string(),
            location: "Chicago, IL".to_string(),
            join_date: date(2023, 3, 10),
            status: EmployeeStatus::Active,
        },
        Employee {
            id: 4,
            name: "Sarah Wilson".to_string(),
            email: "sarah.wilson@company.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            department: "Finance".to_string(),
            position: "Financial Analyst".to_string(),
            location: "Boston, MA".to_string(),
            join_date: date(2022, 7, 5),
            status: EmployeeStatus::Inactive,
        },
    ]
});

// Literal dates below are all valid; MIN only appears if one is mistyped.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The fixed employee records, in display order
#[must_use]
pub fn employees() -> &'static [Employee] {
    &EMPLOYEES
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_shape() {
        let all = employees();
        assert_eq!(all.len(), 4);

        let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = employees().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), employees().len());
    }

    #[test]
    fn test_every_record_validates() {
        for employee in employees() {
            employee.check().unwrap();
            assert_ne!(employee.join_date, NaiveDate::MIN, "{}", employee.name);
        }
    }

    #[test]
    fn test_only_sarah_is_inactive() {
        let inactive: Vec<_> = employees()
            .iter()
            .filter(|e| e.status == EmployeeStatus::Inactive)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(inactive, vec!["Sarah Wilson"]);
    }
}
