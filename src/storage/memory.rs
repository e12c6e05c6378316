//! In-memory employee storage.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::models::EmployeeRecord;

use super::repository::EmployeeRepository;

/// Employee storage held in process memory.
///
/// Ids are assigned from a sequence starting at 1, so id order is
/// insertion order.
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    records: BTreeMap<i64, EmployeeRecord>,
    next_id: i64,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Returns true if no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn save(&self, mut record: EmployeeRecord) -> RosterResult<EmployeeRecord> {
        let mut inner = self.inner.write();

        let id = match record.id {
            Some(id) if inner.records.contains_key(&id) => id,
            Some(id) => return Err(RosterError::EmployeeNotFound { id }),
            None => {
                let id = inner.next_id;
                inner.next_id += 1;
                id
            }
        };

        record.id = Some(id);
        // Replacing the entry drops the previous detail list with it.
        inner.records.insert(id, record.clone());
        debug!(employee_id = id, details_count = record.details.len(), "Employee stored");

        Ok(record)
    }

    fn find_all(&self) -> RosterResult<Vec<EmployeeRecord>> {
        Ok(self.inner.read().records.values().cloned().collect())
    }
}
