//! Records used when no stored collection is available.

use chrono::NaiveDate;

use crate::models::Employee;

fn record(
    id: &str,
    name: &str,
    email: &str,
    position: &str,
    department: &str,
    hire_date: (i32, u32, u32),
    salary: f64,
) -> Employee {
    let (year, month, day) = hire_date;
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        hire_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        salary,
        avatar: None,
    }
}

/// The fixed three-record starter set.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        record(
            "1",
            "John Doe",
            "john.doe@company.com",
            "Software Engineer",
            "Engineering",
            (2023, 1, 15),
            75000.0,
        ),
        record(
            "2",
            "Jane Smith",
            "jane.smith@company.com",
            "Product Manager",
            "Product",
            (2022, 11, 20),
            85000.0,
        ),
        record(
            "3",
            "Mike Johnson",
            "mike.johnson@company.com",
            "UX Designer",
            "Design",
            (2023, 3, 10),
            70000.0,
        ),
    ]
}
