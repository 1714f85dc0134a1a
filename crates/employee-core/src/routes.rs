//! Route table for the single-page app

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A top-level page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    /// Summary metrics
    Dashboard,
    /// Searchable employee list
    Employees,
    /// Static charts
    Analytics,
    /// Settings form
    Settings,
}

impl AppRoute {
    /// Every route in navigation order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Dashboard, Self::Employees, Self::Analytics, Self::Settings]
    }

    /// URL path
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Employees => "/employees",
            Self::Analytics => "/analytics",
            Self::Settings => "/settings",
        }
    }

    /// Navigation label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Employees => "Employees",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Resolve a location pathname, tolerating one trailing slash
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::all().into_iter().find(|route| route.path() == path)
    }

    /// Whether the navigation link for this route is highlighted at `current`
    #[must_use]
    pub fn is_active(self, current: &str) -> bool {
        Self::from_path(current) == Some(self)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for AppRoute {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_path(s).ok_or_else(|| crate::Error::not_found(format!("route {s}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
            assert_eq!(route.to_string().parse::<AppRoute>().unwrap(), route);
        }
    }

    #[rstest]
    #[case("/", Some(AppRoute::Dashboard))]
    #[case("/employees", Some(AppRoute::Employees))]
    #[case("/employees/", Some(AppRoute::Employees))]
    #[case("/analytics", Some(AppRoute::Analytics))]
    #[case("/settings/", Some(AppRoute::Settings))]
    #[case("/payroll", None)]
    #[case("/employees/42", None)]
    #[case("", None)]
    fn test_from_path(#[case] path: &str, #[case] expected: Option<AppRoute>) {
        assert_eq!(AppRoute::from_path(path), expected);
    }

    #[test]
    fn test_is_active_is_exact() {
        assert!(AppRoute::Dashboard.is_active("/"));
        assert!(!AppRoute::Dashboard.is_active("/employees"));
        assert!(AppRoute::Employees.is_active("/employees"));
        assert!(!AppRoute::Employees.is_active("/"));
    }

    #[test]
    fn test_labels_in_nav_order() {
        let labels: Vec<_> = AppRoute::all().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Dashboard", "Employees", "Analytics", "Settings"]);
    }

    #[test]
    fn test_unknown_route_error() {
        let err = "/nope".parse::<AppRoute>().unwrap_err();
        assert_eq!(err.to_string(), "Resource not found: route /nope");
    }
}
