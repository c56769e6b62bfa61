//! Dashboard summary derived from the employee collection.

use chrono::Datelike;
use serde::Serialize;

use super::Employee;

/// Figures shown on the dashboard. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    /// Number of distinct departments
    pub departments: usize,
    /// Arithmetic mean; `None` for an empty collection
    pub average_salary: Option<f64>,
    /// Hires whose `hireDate` falls in `year`
    pub new_hires: usize,
    pub year: i32,
}

impl DashboardStats {
    pub fn compute(employees: &[Employee], year: i32) -> Self {
        Self {
            total_employees: employees.len(),
            departments: distinct_departments(employees).len(),
            average_salary: average_salary(employees),
            new_hires: hired_in_year(employees, year),
            year,
        }
    }
}

/// Distinct departments in first-seen order.
pub fn distinct_departments(employees: &[Employee]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for employee in employees {
        if !departments.contains(&employee.department) {
            departments.push(employee.department.clone());
        }
    }
    departments
}

pub fn average_salary(employees: &[Employee]) -> Option<f64> {
    if employees.is_empty() {
        return None;
    }
    let total: f64 = employees.iter().map(|e| e.salary).sum();
    Some(total / employees.len() as f64)
}

pub fn hired_in_year(employees: &[Employee], year: i32) -> usize {
    employees
        .iter()
        .filter(|e| e.hire_date.year() == year)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_employees;

    #[test]
    fn test_seed_dashboard() {
        let stats = DashboardStats::compute(&seed_employees(), 2023);

        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.departments, 3);
        assert_eq!(stats.average_salary, Some(230000.0 / 3.0));
        assert_eq!(stats.new_hires, 2);
        assert_eq!(stats.year, 2023);
    }

    #[test]
    fn test_empty_collection() {
        let stats = DashboardStats::compute(&[], 2024);

        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.departments, 0);
        assert_eq!(stats.average_salary, None);
        assert_eq!(stats.new_hires, 0);

        let value = serde_json::to_value(&stats).unwrap();
        assert!(value["averageSalary"].is_null());
    }

    #[test]
    fn test_distinct_departments_keep_first_seen_order() {
        let mut employees = seed_employees();
        let mut extra = employees[0].clone();
        extra.id = "4".to_string();
        employees.push(extra);

        assert_eq!(
            distinct_departments(&employees),
            vec!["Engineering", "Product", "Design"]
        );
    }
}
