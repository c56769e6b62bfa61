//! Employee model matching the frontend Employee interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Minimum length for name, position and department.
const MIN_TEXT_LEN: usize = 2;

/// Lowest accepted salary.
const MIN_SALARY: f64 = 1.0;

/// One staff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    /// Serialized as `YYYY-MM-DD`
    pub hire_date: NaiveDate,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Employee {
    /// Build a record from caller data and a store-assigned id.
    pub fn from_input(id: String, input: EmployeeInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            position: input.position,
            department: input.department,
            hire_date: input.hire_date,
            salary: input.salary,
            avatar: input.avatar,
        }
    }

    /// Replace every field except `id`.
    pub fn apply(&mut self, input: EmployeeInput) {
        self.name = input.name;
        self.email = input.email;
        self.position = input.position;
        self.department = input.department;
        self.hire_date = input.hire_date;
        self.salary = input.salary;
        self.avatar = input.avatar;
    }
}

/// Request body for creating or replacing an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl EmployeeInput {
    /// Check the form rules applied before a record reaches the store.
    pub fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name)?;
        require_min_len("Position", &self.position)?;
        require_min_len("Department", &self.department)?;

        if !is_valid_email(&self.email) {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }

        if !self.salary.is_finite() || self.salary < MIN_SALARY {
            return Err(AppError::Validation(
                "Salary must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Counts characters as entered, surrounding whitespace included.
fn require_min_len(field: &str, value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, MIN_TEXT_LEN
        )));
    }
    Ok(())
}

/// Accepts `local@domain.tld` with no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_input() -> EmployeeInput {
        EmployeeInput {
            name: "Ada Lovelace".to_string(),
            email: "ada@company.com".to_string(),
            position: "Analyst".to_string(),
            department: "Research".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            salary: 91000.0,
            avatar: None,
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let employee = Employee::from_input("abc".to_string(), sample_input());
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["id"], "abc");
        assert_eq!(value["hireDate"], "2024-05-02");
        assert_eq!(value["salary"], 91000.0);
        assert!(value.get("avatar").is_none());
    }

    #[test]
    fn test_parses_stored_record() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "1",
            "name": "John Doe",
            "email": "john.doe@company.com",
            "position": "Software Engineer",
            "department": "Engineering",
            "hireDate": "2023-01-15",
            "salary": 75000
        }))
        .unwrap();

        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(employee.salary, 75000.0);
        assert_eq!(employee.avatar, None);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut employee = Employee::from_input("keep-me".to_string(), sample_input());
        let mut replacement = sample_input();
        replacement.name = "Grace Hopper".to_string();
        replacement.avatar = Some("https://img/grace.png".to_string());

        employee.apply(replacement.clone());

        assert_eq!(employee.id, "keep-me");
        assert_eq!(employee.name, "Grace Hopper");
        assert_eq!(employee.avatar, replacement.avatar);
    }

    #[test]
    fn test_validate_accepts_good_input() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut short_name = sample_input();
        short_name.name = "A".to_string();
        assert!(matches!(short_name.validate(), Err(AppError::Validation(_))));

        let mut zero_salary = sample_input();
        zero_salary.salary = 0.0;
        assert!(zero_salary.validate().is_err());

        let mut fractional_salary = sample_input();
        fractional_salary.salary = 0.5;
        assert!(fractional_salary.validate().is_err());

        let mut nan_salary = sample_input();
        nan_salary.salary = f64::NAN;
        assert!(nan_salary.validate().is_err());

        let mut short_department = sample_input();
        short_department.department = "R".to_string();
        assert!(short_department.validate().is_err());
    }

    #[test]
    fn test_validate_edge_values() {
        let mut padded_name = sample_input();
        padded_name.name = " A ".to_string();
        assert!(padded_name.validate().is_ok());

        let mut minimum_salary = sample_input();
        minimum_salary.salary = 1.0;
        assert!(minimum_salary.validate().is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane.smith@company.com"));
        assert!(is_valid_email("a@b.io"));
        assert!(!is_valid_email("jane.smith"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("jane@company"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@company."));
        assert!(!is_valid_email("ja ne@company.com"));
        assert!(!is_valid_email("jane@@company.com"));
    }
}
