//! Listing filter used by the employees view.

use serde::Deserialize;

use super::Employee;

/// Search term plus department selector. Empty values match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilter {
    /// Case-insensitive substring over name, email and position.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact department name.
    #[serde(default)]
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee) && self.matches_department(employee)
    }

    /// Apply the filter, preserving collection order.
    pub fn apply<'a, I>(&self, employees: I) -> Vec<Employee>
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        employees
            .into_iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        let term = match self.search.as_deref() {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        [&employee.name, &employee.email, &employee.position]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_department(&self, employee: &Employee) -> bool {
        match self.department.as_deref() {
            Some(department) if !department.is_empty() => employee.department == department,
            _ => true,
        }
    }
}
