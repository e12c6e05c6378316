//! Audit logging around storage writes.
//!
//! [`AuditedRepository`] wraps any [`EmployeeRepository`] and records who
//! saved which employee before the write is delegated.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::RosterResult;
use crate::models::EmployeeRecord;

use super::repository::EmployeeRepository;

/// The identity acting on a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal(String);

impl Principal {
    /// The principal used when a request carries no identity.
    pub const ANONYMOUS: &'static str = "anonymous";

    /// Creates a principal with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the anonymous principal.
    pub fn anonymous() -> Self {
        Self::new(Self::ANONYMOUS)
    }

    /// Returns the principal's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record of one audited save.
#[derive(Debug)]
struct AuditEvent {
    principal: Principal,
    /// `None` for a create.
    employee_id: Option<i64>,
    employee_name: String,
    details_count: usize,
    recorded_at: DateTime<Utc>,
}

impl AuditEvent {
    fn capture(principal: &Principal, record: &EmployeeRecord) -> Self {
        Self {
            principal: principal.clone(),
            employee_id: record.id,
            employee_name: record.name.clone(),
            details_count: record.detail_count(),
            recorded_at: Utc::now(),
        }
    }

    fn is_create(&self) -> bool {
        self.employee_id.is_none()
    }

    fn action(&self) -> &'static str {
        if self.is_create() { "create" } else { "update" }
    }
}

/// A repository decorator that audits every save.
#[derive(Debug, Clone)]
pub struct AuditedRepository<R> {
    inner: R,
}

impl<R: EmployeeRepository> AuditedRepository<R> {
    /// Wraps `inner` with audit logging.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Saves `record` on behalf of `principal`, logging the audit event first.
    pub fn save_as(
        &self,
        principal: &Principal,
        record: EmployeeRecord,
    ) -> RosterResult<EmployeeRecord> {
        let event = AuditEvent::capture(principal, &record);
        info!(
            target: "audit",
            principal = %event.principal,
            action = event.action(),
            employee_id = ?event.employee_id,
            employee_name = %event.employee_name,
            details_count = event.details_count,
            recorded_at = %event.recorded_at,
            "Employee save requested"
        );

        self.inner.save(record)
    }

    /// Returns every stored employee. Reads are not audited.
    pub fn find_all(&self) -> RosterResult<Vec<EmployeeRecord>> {
        self.inner.find_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryEmployeeRepository;

    fn new_employee(name: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: None,
            name: name.to_string(),
            position: "QA".to_string(),
            details: vec![],
        }
    }

    #[test]
    fn test_anonymous_principal_name() {
        assert_eq!(Principal::anonymous().name(), "anonymous");
        assert_eq!(Principal::new("admin").to_string(), "admin");
    }

    #[test]
    fn test_save_as_delegates_to_inner() {
        let repo = AuditedRepository::new(InMemoryEmployeeRepository::new());

        let saved = repo.save_as(&Principal::new("admin"), new_employee("Bo")).unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_capture_new_employee_is_create() {
        let event = AuditEvent::capture(&Principal::new("admin"), &new_employee("Bo"));

        assert_eq!(event.principal.name(), "admin");
        assert_eq!(event.employee_name, "Bo");
        assert_eq!(event.details_count, 0);
        assert_eq!(event.action(), "create");
    }

    #[test]
    fn test_capture_saved_employee_is_update() {
        let mut record = new_employee("Bo");
        record.id = Some(1);

        let event = AuditEvent::capture(&Principal::anonymous(), &record);
        assert_eq!(event.employee_id, Some(1));
        assert!(!event.is_create());
        assert_eq!(event.action(), "update");
    }

    #[test]
    fn test_failed_save_propagates_error() {
        let repo = AuditedRepository::new(InMemoryEmployeeRepository::new());
        let mut record = new_employee("Bo");
        record.id = Some(7);

        assert!(repo.save_as(&Principal::anonymous(), record).is_err());
    }
}
