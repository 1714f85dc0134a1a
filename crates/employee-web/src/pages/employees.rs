//! Employee directory page

use crate::components::employee_list::EmployeeList;
use leptos::prelude::*;

/// Employees page component
#[component]
pub fn Employees() -> impl IntoView {
    view! {
        <div class="page employees">
            <div class="page-header">
                <h2>"Employees"</h2>
                <p>"Manage and view all employee information"</p>
            </div>
            <EmployeeList />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employees_component_exists() {
        let _component = Employees;
    }
}
