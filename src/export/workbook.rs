//! Spreadsheet serialization of the roster.

use std::io::Write;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::models::EmployeeRecord;

use super::rows::{EXPORT_HEADER, ExportRow, build_rows};

/// The name of the single sheet in every export.
pub const EXPORT_SHEET_NAME: &str = "Employees";

/// The content type of the exported workbook.
pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The file name offered to clients downloading the export.
pub const EXPORT_FILE_NAME: &str = "employees.xlsx";

/// The longest text, in characters, a single cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Integers up to this magnitude survive the conversion to a cell number.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Significant digits a cell number keeps.
const MAX_EXACT_DIGITS: usize = 15;

/// Builds the roster workbook and returns its `.xlsx` bytes.
///
/// The whole workbook is materialised in memory. Any failure while building
/// or serializing it aborts the export; no partial output is returned.
pub fn export_workbook(employees: &[EmployeeRecord]) -> Result<Vec<u8>, ExportError> {
    let rows = build_rows(employees);
    debug!(
        employees = employees.len(),
        rows = rows.len(),
        "Building roster workbook"
    );

    let mut workbook = Workbook::new();
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(EXPORT_SHEET_NAME)?;

        for (col, title) in (0u16..).zip(EXPORT_HEADER) {
            worksheet.write_string(0, col, title)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let row_num = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            write_row(worksheet, row_num, row)?;
        }

        worksheet.autofit();
    }

    let bytes = workbook.save_to_buffer()?;
    info!(
        rows = rows.len() + 1,
        size_bytes = bytes.len(),
        "Roster workbook generated"
    );
    Ok(bytes)
}

/// Builds the roster workbook and writes it to `writer` in one flush.
pub fn write_export<W: Write>(employees: &[EmployeeRecord], mut writer: W) -> Result<(), ExportError> {
    let bytes = export_workbook(employees)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Writes one data row. Absent values are left as blank cells.
///
/// Ids and salaries are numeric cells unless a cell number would change their
/// value, in which case they are written as text.
fn write_row(worksheet: &mut Worksheet, row_num: u32, row: &ExportRow) -> Result<(), XlsxError> {
    if let Some(id) = row.id {
        if id.unsigned_abs() <= MAX_EXACT_INTEGER {
            worksheet.write_number(row_num, 0, id as f64)?;
        } else {
            worksheet.write_string(row_num, 0, id.to_string())?;
        }
    }
    worksheet.write_string(row_num, 1, &row.name)?;
    worksheet.write_string(row_num, 2, &row.position)?;
    if let Some(salary) = row.salary {
        match exact_number(salary) {
            Some(number) => worksheet.write_number(row_num, 3, number)?,
            None => worksheet.write_string(row_num, 3, salary.to_string())?,
        };
    }
    if let Some(contract_type) = &row.contract_type {
        worksheet.write_string(row_num, 4, contract_type)?;
    }
    Ok(())
}

/// Returns the salary as a cell number when no significant digit is lost.
fn exact_number(salary: Decimal) -> Option<f64> {
    let digits = salary.normalize().mantissa().unsigned_abs().to_string().len();
    if digits > MAX_EXACT_DIGITS {
        return None;
    }
    salary.to_f64()
}
