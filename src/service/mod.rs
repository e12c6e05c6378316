//! Service layer for the roster.
//!
//! Ties the roster mapper, the audited repository and the tabular exporter
//! together for the request handlers.

mod roster;

pub use roster::{CreateOutcome, RosterService};
