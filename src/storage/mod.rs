//! Employee storage.
//!
//! The [`EmployeeRepository`] trait is the storage collaborator the rest of
//! the crate talks to. [`InMemoryEmployeeRepository`] is the bundled
//! implementation and [`AuditedRepository`] adds audit logging to writes.

mod audit;
mod memory;
mod repository;

pub use audit::{AuditedRepository, Principal};
pub use memory::InMemoryEmployeeRepository;
pub use repository::EmployeeRepository;
