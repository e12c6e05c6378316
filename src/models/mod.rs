//! Core data models for the roster service.
//!
//! This module contains the persisted and transport shapes of an employee
//! and the detail records an employee owns.

mod detail;
mod employee;

pub use detail::DetailRecord;
pub use employee::{EmployeeRecord, TransportEmployee};
