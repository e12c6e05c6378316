//! Mapping between the persisted and transport shapes of an employee.
//!
//! The detail codec turns a single [`DetailRecord`](crate::models::DetailRecord)
//! into a detail token and back; the roster mapper applies it across an
//! employee's detail list.

mod detail_codec;
mod roster_mapper;

pub use detail_codec::{decode_detail, encode_detail};
pub use roster_mapper::{MappingOutcome, to_persisted, to_persisted_with_report, to_transport};
