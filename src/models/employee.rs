//! Employee models in their persisted and transport shapes.
//!
//! [`EmployeeRecord`] is the persisted shape, holding structured
//! [`DetailRecord`] children. [`TransportEmployee`] is the shape exchanged
//! over the request boundary, where each detail is an encoded token.

use serde::{Deserialize, Deserializer, Serialize};

use super::DetailRecord;

/// An employee as held by storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Storage-assigned identifier; `None` until the record is first saved.
    pub id: Option<i64>,
    /// The employee's name.
    pub name: String,
    /// The employee's position.
    pub position: String,
    /// Owned detail records, in insertion order.
    pub details: Vec<DetailRecord>,
}

impl EmployeeRecord {
    /// Returns the number of detail records this employee owns.
    pub fn detail_count(&self) -> usize {
        self.details.len()
    }
}

/// An employee as exchanged over the request boundary.
///
/// `details` holds one encoded detail token per [`DetailRecord`]. A missing
/// or `null` `details` field is read as an empty list, and the field is
/// always written as an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportEmployee {
    /// Identifier, absent for employees that have not been created yet.
    #[serde(default)]
    pub id: Option<i64>,
    /// The employee's name.
    pub name: String,
    /// The employee's position.
    pub position: String,
    /// Encoded detail tokens.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
