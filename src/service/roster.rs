//! Roster operations behind the request boundary.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{RosterError, RosterResult};
use crate::export::{MAX_CELL_CHARS, export_workbook};
use crate::mapping::{MappingOutcome, to_persisted_with_report, to_transport};
use crate::models::{EmployeeRecord, TransportEmployee};
use crate::storage::{AuditedRepository, EmployeeRepository, Principal};

/// The result of creating an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// The saved employee in transport shape.
    pub employee: TransportEmployee,
    /// The number of detail tokens that failed to decode and were not stored.
    pub dropped: usize,
}

/// Creates, lists and exports employees against a repository.
///
/// Every save goes through an [`AuditedRepository`].
#[derive(Clone)]
pub struct RosterService {
    repository: AuditedRepository<Arc<dyn EmployeeRepository>>,
}

impl RosterService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            repository: AuditedRepository::new(repository),
        }
    }

    /// Saves a transport-shaped employee and returns it as stored.
    ///
    /// Detail tokens that fail to decode are dropped; the count is reported
    /// in the outcome rather than failing the request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` when the name is blank or when a name,
    /// position or contract type is longer than a spreadsheet cell can hold.
    /// Propagates any storage error unchanged.
    pub fn create(
        &self,
        principal: &Principal,
        employee: TransportEmployee,
    ) -> RosterResult<CreateOutcome> {
        if employee.name.trim().is_empty() {
            return Err(RosterError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        let supplied = employee.details.len();
        let MappingOutcome { record, dropped } = to_persisted_with_report(employee);
        validate_cell_lengths(&record)?;
        if dropped > 0 {
            warn!(
                employee = %record.name,
                supplied,
                dropped,
                "Storing employee with fewer details than supplied"
            );
        }

        let saved = self.repository.save_as(principal, record)?;
        info!(
            employee_id = ?saved.id,
            details_count = saved.detail_count(),
            "Employee saved"
        );

        Ok(CreateOutcome {
            employee: to_transport(&saved),
            dropped,
        })
    }

    /// Returns every stored employee in transport shape.
    pub fn list(&self) -> RosterResult<Vec<TransportEmployee>> {
        let employees = self.repository.find_all()?;
        info!(count = employees.len(), "Listing employees");
        Ok(employees.iter().map(to_transport).collect())
    }

    /// Builds the spreadsheet export of every stored employee.
    pub fn export(&self) -> RosterResult<Vec<u8>> {
        let employees = self.repository.find_all()?;
        info!(count = employees.len(), "Exporting employees");
        Ok(export_workbook(&employees)?)
    }

    /// Loads seed employees, returning how many were stored.
    pub fn seed(&self, employees: Vec<TransportEmployee>) -> RosterResult<usize> {
        let system = Principal::new("system");
        let mut stored = 0;
        for employee in employees {
            self.create(&system, employee)?;
            stored += 1;
        }
        Ok(stored)
    }
}

/// Rejects text that the spreadsheet export could not write.
fn validate_cell_lengths(record: &EmployeeRecord) -> RosterResult<()> {
    let too_long = |text: &str| text.chars().count() > MAX_CELL_CHARS;

    let field = if too_long(&record.name) {
        Some("name".to_string())
    } else if too_long(&record.position) {
        Some("position".to_string())
    } else {
        record
            .details
            .iter()
            .position(|d| d.contract_type.as_deref().is_some_and(too_long))
            .map(|index| format!("details[{}].contractType", index))
    };

    match field {
        Some(field) => Err(RosterError::InvalidEmployee {
            field,
            message: format!("must not exceed {} characters", MAX_CELL_CHARS),
        }),
        None => Ok(()),
    }
}
