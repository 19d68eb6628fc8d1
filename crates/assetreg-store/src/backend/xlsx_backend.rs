#![allow(clippy::result_large_err)]

use super::{employees_from_rows, RosterBackend};
use crate::errors::{backend_error, Result};
use assetreg_core::model::{Employee, EMPLOYEE_COLUMNS};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::io::Cursor;

/// Name of the worksheet the roster is written to
pub const SHEET_NAME: &str = "Employees";

/// Excel workbook roster; the first worksheet holds the table
///
/// Every cell is written as a string so identifiers such as `007` are not
/// reinterpreted as numbers by spreadsheet tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxBackend;

impl RosterBackend for XlsxBackend {
    fn name(&self) -> &'static str {
        "xlsx"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Employee>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| backend_error("roster_read", self.name(), e))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| backend_error("roster_read", self.name(), e))?,
            None => return Ok(Vec::new()),
        };

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());

        match rows.next() {
            Some(header) => employees_from_rows(&header, rows),
            None => Ok(Vec::new()),
        }
    }

    fn encode(&self, employees: &[Employee]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet
            .set_name(SHEET_NAME)
            .map_err(|e| backend_error("roster_write", self.name(), e))?;

        for (col, header) in (0u16..).zip(EMPLOYEE_COLUMNS) {
            sheet
                .write_string_with_format(0, col, header, &bold)
                .map_err(|e| backend_error("roster_write", self.name(), e))?;
        }

        for (row, employee) in (1u32..).zip(employees) {
            for (col, value) in (0u16..).zip(employee.to_row()) {
                if value.is_empty() {
                    continue;
                }
                sheet
                    .write_string(row, col, value)
                    .map_err(|e| backend_error("roster_write", self.name(), e))?;
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| backend_error("roster_write", self.name(), e))
    }
}

/// Text of one cell; numbers use their shortest form (`7.0` reads as `7`)
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_text_identifiers() {
        let employees = vec![
            Employee::new("007", "James Bond")
                .with_department("Field Ops")
                .with_email("jb@example.org"),
            Employee::new("E2", "Jane Doe").with_assigned_assets("Laptop"),
        ];

        let bytes = XlsxBackend.encode(&employees).unwrap();
        assert_eq!(XlsxBackend.decode(&bytes).unwrap(), employees);
    }

    #[test]
    fn test_empty_roster_keeps_header() {
        let bytes = XlsxBackend.encode(&[]).unwrap();
        assert!(XlsxBackend.decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_numeric_cells_read_as_short_text() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Employee ID").unwrap();
        sheet.write_string(0, 1, "Name").unwrap();
        sheet.write_number(1, 0, 7.0).unwrap();
        sheet.write_string(1, 1, "Seven").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let employees = XlsxBackend.decode(&bytes).unwrap();
        assert_eq!(employees, vec![Employee::new("7", "Seven")]);
    }

    #[test]
    fn test_garbage_is_a_backend_error() {
        let err = XlsxBackend.decode(b"not a workbook").unwrap_err();
        assert_eq!(err.code(), "ERR_PERSISTENCE");
    }
}
