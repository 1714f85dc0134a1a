//! Client-side search and department filtering for the employee list
//!
//! A record is visible when the search text is empty or occurs
//! (case-insensitively) in its name, email or department, and the department
//! selector is either "all" or equal to the record's department. Input order
//! is preserved.

use crate::types::Employee;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Select value meaning "every department"
pub const ALL_DEPARTMENTS: &str = "all";

/// Message rendered when no record survives the filter
pub const EMPTY_RESULT_MESSAGE: &str = "No employees found matching your criteria.";

/// Department selector state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentFilter {
    /// Match every department
    #[default]
    All,
    /// Match exactly this department
    Only(String),
}

impl DepartmentFilter {
    /// Build a filter from an option value of the department select
    #[must_use]
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_DEPARTMENTS {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Option value to bind back into the department select
    #[must_use]
    pub fn select_value(&self) -> &str {
        match self {
            Self::All => ALL_DEPARTMENTS,
            Self::Only(department) => department,
        }
    }

    /// Whether a record in `department` passes this selector
    #[must_use]
    pub fn admits(&self, department: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == department,
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.select_value())
    }
}

impl From<&str> for DepartmentFilter {
    fn from(value: &str) -> Self {
        Self::from_select_value(value)
    }
}

/// Search text plus department selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// Free-text search, matched as a case-insensitive substring
    pub search: String,
    /// Department selector
    pub department: DepartmentFilter,
}

impl EmployeeQuery {
    /// Create a query
    #[must_use]
    pub fn new(search: impl Into<String>, department: DepartmentFilter) -> Self {
        Self {
            search: search.into(),
            department,
        }
    }

    /// True when the query lets every record through
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.department == DepartmentFilter::All
    }

    /// Whether `employee` is visible under this query
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        Matcher::new(self).matches(employee)
    }
}

/// Query with the search needle lowered once
struct Matcher<'q> {
    needle: Option<String>,
    department: &'q DepartmentFilter,
}

impl<'q> Matcher<'q> {
    fn new(query: &'q EmployeeQuery) -> Self {
        let needle = (!query.search.is_empty()).then(|| query.search.to_lowercase());
        Self {
            needle,
            department: &query.department,
        }
    }

    fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee) && self.department.admits(&employee.department)
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        self.needle.as_deref().is_none_or(|needle| {
            [&employee.name, &employee.email, &employee.department]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
        })
    }
}

/// Records visible under `query`, in their original order
#[must_use]
pub fn filter_employees(employees: &[Employee], query: &EmployeeQuery) -> Vec<Employee> {
    let matcher = Matcher::new(query);
    employees
        .iter()
        .filter(|employee| matcher.matches(employee))
        .cloned()
        .collect()
}

/// Distinct departments in first-seen order, for the department select
#[must_use]
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for employee in employees {
        if !seen.iter().any(|d| d == &employee.department) {
            seen.push(employee.department.clone());
        }
    }
    seen
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::data::employees;
    use crate::types::EmployeeStatus;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn names(list: &[Employee]) -> Vec<&str> {
        list.iter().map(|e| e.name.as_str()).collect()
    }

    #[rstest]
    #[case("", ALL_DEPARTMENTS, vec!["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"])]
    #[case("john", ALL_DEPARTMENTS, vec!["John Doe", "Mike Johnson"])]
    #[case("JOHN", ALL_DEPARTMENTS, vec!["John Doe", "Mike Johnson"])]
    #[case("john.doe", ALL_DEPARTMENTS, vec!["John Doe"])]
    #[case("", "Marketing", vec!["Jane Smith"])]
    #[case("zzz", ALL_DEPARTMENTS, vec![])]
    #[case("engineer", ALL_DEPARTMENTS, vec!["John Doe"])]
    #[case("@company.com", "Finance", vec!["Sarah Wilson"])]
    #[case("john", "HR", vec!["Mike Johnson"])]
    #[case("jane", "HR", vec![])]
    #[case("", "Sales", vec![])]
    fn test_filter_scenarios(
        #[case] search: &str,
        #[case] department: &str,
        #[case] expected: Vec<&str>,
    ) {
        let query = EmployeeQuery::new(search, DepartmentFilter::from_select_value(department));
        let result = filter_employees(employees(), &query);
        assert_eq!(names(&result), expected);
    }

    #[test]
    fn test_department_match_is_exact() {
        // Search is case-insensitive, the department selector is not.
        let query = EmployeeQuery::new("", DepartmentFilter::Only("marketing".to_string()));
        assert!(filter_employees(employees(), &query).is_empty());
    }

    #[test]
    fn test_search_ignores_position_and_location() {
        let query = EmployeeQuery::new("Boston", DepartmentFilter::All);
        assert!(filter_employees(employees(), &query).is_empty());

        let query = EmployeeQuery::new("Analyst", DepartmentFilter::All);
        assert!(filter_employees(employees(), &query).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_not_empty() {
        let query = EmployeeQuery::new(" ", DepartmentFilter::All);
        // Every name contains a space, no email or department does.
        assert_eq!(filter_employees(employees(), &query).len(), 4);

        let query = EmployeeQuery::new("  ", DepartmentFilter::All);
        assert!(filter_employees(employees(), &query).is_empty());
    }

    #[test]
    fn test_select_value_round_trip() {
        assert_eq!(DepartmentFilter::from_select_value("all"), DepartmentFilter::All);
        assert_eq!(DepartmentFilter::All.select_value(), "all");
        assert_eq!(
            DepartmentFilter::from("HR"),
            DepartmentFilter::Only("HR".to_string())
        );
        assert_eq!(DepartmentFilter::Only("HR".to_string()).to_string(), "HR");
    }

    #[test]
    fn test_is_unfiltered() {
        assert!(EmployeeQuery::default().is_unfiltered());
        assert!(!EmployeeQuery::new("a", DepartmentFilter::All).is_unfiltered());
        assert!(!EmployeeQuery::new("", "HR".into()).is_unfiltered());
    }

    #[test]
    fn test_departments_first_seen_order() {
        assert_eq!(
            departments(employees()),
            vec!["Engineering", "Marketing", "HR", "Finance"]
        );
    }

    #[test]
    fn test_departments_deduplicates() {
        let mut list = employees().to_vec();
        let mut extra = list[0].clone();
        extra.id = 99;
        list.push(extra);

        assert_eq!(departments(&list).len(), 4);
        assert!(departments(&[]).is_empty());
    }

    fn arb_employee() -> impl Strategy<Value = Employee> {
        (
            any::<u32>(),
            "[A-Za-z ]{1,12}",
            "[a-z.]{1,8}@[a-z]{1,6}\\.com",
            prop::sample::select(vec!["Engineering", "Marketing", "HR", "Finance", "Sales"]),
            any::<bool>(),
        )
            .prop_map(|(id, name, email, department, active)| Employee {
                id,
                name,
                email,
                phone: "+1 (555) 000-0000".to_string(),
                department: department.to_string(),
                position: "Staff".to_string(),
                location: "Remote".to_string(),
                join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                status: if active {
                    EmployeeStatus::Active
                } else {
                    EmployeeStatus::Inactive
                },
            })
    }

    fn arb_query() -> impl Strategy<Value = EmployeeQuery> {
        (
            "[A-Za-z.@ ]{0,4}",
            prop::sample::select(vec!["all", "Engineering", "Marketing", "HR", "Finance", "Sales"]),
        )
            .prop_map(|(search, department)| {
                EmployeeQuery::new(search, DepartmentFilter::from_select_value(department))
            })
    }

    proptest! {
        #[test]
        fn prop_result_is_exactly_the_matching_subsequence(
            list in prop::collection::vec(arb_employee(), 0..20),
            query in arb_query(),
        ) {
            let result = filter_employees(&list, &query);
            let expected: Vec<Employee> =
                list.iter().filter(|e| query.matches(e)).cloned().collect();
            prop_assert_eq!(&result, &expected);

            // Subsequence of the input: order preserved, nothing invented.
            let mut rest = list.iter();
            for kept in &result {
                prop_assert!(rest.any(|e| e == kept));
            }
        }

        #[test]
        fn prop_filter_is_idempotent(
            list in prop::collection::vec(arb_employee(), 0..20),
            query in arb_query(),
        ) {
            let once = filter_employees(&list, &query);
            let twice = filter_employees(&once, &query);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_unfiltered_query_returns_everything(
            list in prop::collection::vec(arb_employee(), 0..20),
        ) {
            prop_assert_eq!(filter_employees(&list, &EmployeeQuery::default()), list);
        }
    }
}
