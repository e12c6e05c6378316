//! The storage collaborator contract.

use std::sync::Arc;

use crate::error::RosterResult;
use crate::models::EmployeeRecord;

/// Storage for employee records keyed by integer id.
///
/// Implementations own the detail records of every employee they hold: a
/// save replaces an employee's detail list wholesale and no detail record
/// is ever shared between employees.
pub trait EmployeeRepository: Send + Sync {
    /// Saves an employee.
    ///
    /// Assigns the next id when `record.id` is `None`; otherwise replaces the
    /// stored employee with that id, including its whole detail list.
    fn save(&self, record: EmployeeRecord) -> RosterResult<EmployeeRecord>;

    /// Returns every stored employee in id order.
    fn find_all(&self) -> RosterResult<Vec<EmployeeRecord>>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for Arc<R> {
    fn save(&self, record: EmployeeRecord) -> RosterResult<EmployeeRecord> {
        (**self).save(record)
    }

    fn find_all(&self) -> RosterResult<Vec<EmployeeRecord>> {
        (**self).find_all()
    }
}
