//! Conversion between the persisted and transport shapes of an employee.
//!
//! Both directions are pure functions over their input. Decoding is lossy
//! by policy: a detail token that fails to decode is dropped and mapping
//! continues. Use [`to_persisted_with_report`] when the caller needs to know
//! how many tokens were dropped.

use tracing::warn;

use crate::models::{EmployeeRecord, TransportEmployee};

use super::detail_codec::{decode_detail, encode_detail};

/// The result of mapping a transport employee to its persisted shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOutcome {
    /// The persisted-shape employee, holding every token that decoded.
    pub record: EmployeeRecord,
    /// The number of tokens that failed to decode and were dropped.
    pub dropped: usize,
}

/// Converts a transport employee to its persisted shape.
///
/// Undecodable detail tokens are omitted from the result. An identifier of
/// `0` is treated as absent.
///
/// # Examples
///
/// ```
/// use roster_service::mapping::to_persisted;
/// use roster_service::models::TransportEmployee;
///
/// let employee = TransportEmployee {
///     id: None,
///     name: "Ann".to_string(),
///     position: "Eng".to_string(),
///     details: vec![
///         r#"{"salary":100,"contractType":"FT","year":"2023"}"#.to_string(),
///         "garbage".to_string(),
///     ],
/// };
///
/// let record = to_persisted(employee);
/// assert_eq!(record.details.len(), 1);
/// ```
pub fn to_persisted(employee: TransportEmployee) -> EmployeeRecord {
    to_persisted_with_report(employee).record
}

/// Converts a transport employee to its persisted shape, reporting how many
/// detail tokens were dropped.
pub fn to_persisted_with_report(employee: TransportEmployee) -> MappingOutcome {
    let TransportEmployee {
        id,
        name,
        position,
        details: tokens,
    } = employee;

    let mut details = Vec::with_capacity(tokens.len());
    let mut dropped = 0;

    for (index, token) in tokens.iter().enumerate() {
        match decode_detail(token) {
            Ok(detail) => details.push(detail),
            Err(err) => {
                warn!(
                    employee = %name,
                    token_index = index,
                    error = %err,
                    "Dropping undecodable detail token"
                );
                dropped += 1;
            }
        }
    }

    MappingOutcome {
        record: EmployeeRecord {
            id: id.filter(|id| *id != 0),
            name,
            position,
            details,
        },
        dropped,
    }
}

/// Converts a persisted employee to its transport shape.
///
/// Produces exactly one token per detail record, in order.
pub fn to_transport(record: &EmployeeRecord) -> TransportEmployee {
    TransportEmployee {
        id: record.id,
        name: record.name.clone(),
        position: record.position.clone(),
        details: record.details.iter().map(encode_detail).collect(),
    }
}
