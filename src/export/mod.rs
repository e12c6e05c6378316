//! Tabular export of the roster.
//!
//! Employees are flattened into one row per (employee, detail) pair below a
//! fixed header, then serialized as a single-sheet `.xlsx` workbook.

mod rows;
mod workbook;

pub use rows::{EXPORT_HEADER, ExportRow, build_rows};
pub use workbook::{
    EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, EXPORT_SHEET_NAME, MAX_CELL_CHARS, export_workbook,
    write_export,
};
