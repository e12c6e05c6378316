//! Error types for the roster service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`DecodeError`] and [`ExportError`] belong to the mapping and export
//! layers; [`RosterError`] is what service and storage operations return.

use thiserror::Error;

/// A detail token did not follow the detail token schema.
///
/// The roster mapper treats this as "drop this element", never as a failure
/// of the whole mapping.
///
/// # Example
///
/// ```
/// use roster_service::error::DecodeError;
///
/// let error = DecodeError::new("expected value at line 1 column 1");
/// assert_eq!(
///     error.to_string(),
///     "Malformed detail token: expected value at line 1 column 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed detail token: {message}")]
pub struct DecodeError {
    /// A description of why the token could not be decoded.
    pub message: String,
}

impl DecodeError {
    /// Creates a decode error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Spreadsheet construction or the final byte-stream flush failed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The workbook writer rejected an operation.
    #[error("Spreadsheet generation failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Writing the finished workbook to its destination failed.
    #[error("Failed to write spreadsheet: {0}")]
    Io(#[from] std::io::Error),
}

/// The main error type for the roster service.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An update referenced an employee that storage does not hold.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        id: i64,
    },

    /// The storage layer failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// The spreadsheet export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
