// Shared test fixture for employees.
// Compiled into the crate only during tests, exposed under `crate::tests::fixtures`.

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::status::StatusValue;
use chrono::{DateTime, TimeZone, Utc};

pub const FIXED_EMPLOYEE_ID: &str = "0192d3a4-0000-7000-8000-000000000001";

/// 2026-10-19 09:00 UTC, a Monday morning.
pub fn fixed_date_modified() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
}

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: Employee {
                id: FIXED_EMPLOYEE_ID.to_string(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                status: StatusValue::InOffice,
                default_status: StatusValue::InOffice,
                message: String::new(),
                date_modified: fixed_date_modified(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn status(mut self, v: StatusValue) -> Self {
        self.inner.status = v;
        self
    }

    pub fn default_status(mut self, v: StatusValue) -> Self {
        self.inner.default_status = v;
        self
    }

    pub fn message(mut self, v: impl Into<String>) -> Self {
        self.inner.message = v.into();
        self
    }

    pub fn date_modified(mut self, v: DateTime<Utc>) -> Self {
        self.inner.date_modified = v;
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

#[cfg(test)]
mod employee_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(EmployeeBuilder::default().build(), EmployeeBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let date_modified = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let employee = EmployeeBuilder::new()
            .id("id-1")
            .name("Grace Hopper")
            .email("grace@example.com")
            .status(StatusValue::Wfh)
            .default_status(StatusValue::OutOfOffice)
            .message("on a ship")
            .date_modified(date_modified)
            .build();

        assert_eq!(employee.id, "id-1");
        assert_eq!(employee.name, "Grace Hopper");
        assert_eq!(employee.email, "grace@example.com");
        assert_eq!(employee.status, StatusValue::Wfh);
        assert_eq!(employee.default_status, StatusValue::OutOfOffice);
        assert_eq!(employee.message, "on a ship");
        assert_eq!(employee.date_modified, date_modified);
    }
}
