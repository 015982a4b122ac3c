//! Employee directory types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::serde::string_or_number;

/// Employee record from the company directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    /// Provider fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET v1/employees/directory`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Employment dates returned by the scoped employee lookup.
///
/// The provider may omit either field; absent values stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub termination_date: Option<String>,
}

/// Point-in-time snapshot of the directory keyed by employee id.
///
/// Keys keep the position of their first occurrence; a later record with the
/// same id replaces the earlier value in place.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record with the same id.
    pub fn insert(&mut self, employee: Employee) {
        match self.index.get(&employee.id) {
            Some(&position) => self.employees[position] = employee,
            None => {
                self.index.insert(employee.id.clone(), self.employees.len());
                self.employees.push(employee);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.index.get(id).map(|&position| &self.employees[position])
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }
}

impl FromIterator<Employee> for EmployeeDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut directory = Self::new();
        for employee in iter {
            directory.insert(employee);
        }
        directory
    }
}

impl From<DirectoryResponse> for EmployeeDirectory {
    fn from(response: DirectoryResponse) -> Self {
        response.employees.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn employee(value: Value) -> Employee {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn duplicate_ids_keep_last_record() {
        let directory: EmployeeDirectory = vec![
            employee(json!({"id": "5", "name": "A"})),
            employee(json!({"id": "5", "name": "B"})),
        ]
        .into_iter()
        .collect();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("5").unwrap().extra["name"], "B");
    }

    #[test]
    fn replaced_entry_keeps_first_position() {
        let directory: EmployeeDirectory = vec![
            employee(json!({"id": "1", "name": "first"})),
            employee(json!({"id": "2"})),
            employee(json!({"id": "1", "name": "again"})),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = directory.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(directory.get("1").unwrap().extra["name"], "again");
    }

    #[test]
    fn unknown_fields_round_trip_unchanged() {
        let raw = json!({
            "id": "5",
            "displayName": "Ada Lovelace",
            "hireDate": "2020-01-01",
            "mobilePhone": "555-0100",
            "photoUploaded": true
        });
        let parsed = employee(raw.clone());
        assert_eq!(parsed.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn details_ignore_extra_fields() {
        let details: EmployeeDetails = serde_json::from_value(json!({
            "id": "5",
            "hireDate": "2019-04-01",
            "firstName": "Ada"
        }))
        .unwrap();
        assert_eq!(
            details,
            EmployeeDetails { hire_date: Some("2019-04-01".to_string()), termination_date: None }
        );
    }
}
