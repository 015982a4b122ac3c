//! Provider constants
//!
//! Centralized location for the BambooHR endpoints and wire conventions used
//! by the client.

/// Host serving the BambooHR REST gateway.
pub const BAMBOOHR_API_HOST: &str = "api.bamboohr.com";

/// Gateway path prefix placed between the host and the namespace.
pub const API_GATEWAY_PATH: &str = "api/gateway.php";

/// BambooHR ignores the Basic auth password; the token is the username.
pub const BASIC_AUTH_PASSWORD: &str = "x";

// Endpoint paths, relative to `<gateway>/<namespace>/`
pub const AUTH_PROBE_PATH: &str = "v1/employees/0";
pub const USERS_PATH: &str = "v1/meta/users";
pub const EMPLOYEE_DIRECTORY_PATH: &str = "v1/employees/directory";
pub const COMPANY_FILES_PATH: &str = "v1/files/view";

/// Fields requested by the employee details lookup.
pub const EMPLOYEE_DETAIL_FIELDS: &str = "terminationDate,hireDate";

/// Status reported on authentication failures that never produced a response.
pub const UNKNOWN_STATUS: i32 = -1;

/// Path listing the files attached to one employee.
#[must_use]
pub fn employee_files_path(employee_id: &str) -> String {
    format!("v1/employees/{employee_id}/files/view")
}

/// Path fetching the employment dates of one employee.
#[must_use]
pub fn employee_details_path(employee_id: &str) -> String {
    format!("v1/employees/{employee_id}/?fields={EMPLOYEE_DETAIL_FIELDS}")
}
