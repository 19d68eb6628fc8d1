//! Roster file formats
//!
//! A backend only translates between bytes and employee rows. Reading the
//! file, self-healing and the atomic rewrite belong to `RosterStore`.

#![allow(clippy::result_large_err)]

mod csv_backend;
mod xlsx_backend;

pub use csv_backend::CsvBackend;
pub use xlsx_backend::XlsxBackend;

use crate::errors::{from_registry, Result};
use assetreg_core::errors::RegistryError;
use assetreg_core::model::{Employee, EmployeeField};
use std::path::Path;

/// A row-oriented file format the roster can live in
pub trait RosterBackend: Send + Sync {
    /// Short format name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Parse a whole roster file
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the bytes are not a readable file of this
    /// format, `MissingColumns` when a non-empty file lacks `Employee ID`.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Employee>>;

    /// Render the full roster, header first
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the format writer fails.
    fn encode(&self, employees: &[Employee]) -> Result<Vec<u8>>;
}

/// Pick the backend from the file extension: `.xlsx`/`.xlsm` are
/// spreadsheets, anything else is CSV
pub fn backend_for_path(path: &Path) -> Box<dyn RosterBackend> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") | Some("xlsm") => Box::new(XlsxBackend),
        _ => Box::new(CsvBackend),
    }
}

/// Map header + text rows onto employees
///
/// Columns are located by header name, so their order in the file does not
/// matter and unknown columns are dropped. Fully blank rows are skipped.
pub(crate) fn employees_from_rows<I>(header: &[String], rows: I) -> Result<Vec<Employee>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    if header.is_empty() {
        return Ok(Vec::new());
    }

    let positions: Vec<(usize, EmployeeField)> = header
        .iter()
        .enumerate()
        .filter_map(|(index, h)| EmployeeField::from_header(h).map(|f| (index, f)))
        .collect();

    if !positions.iter().any(|(_, f)| *f == EmployeeField::Id) {
        return Err(from_registry(
            "roster_read",
            RegistryError::MissingColumns {
                columns: vec![EmployeeField::Id.header().to_string()],
            },
        ));
    }

    let mut employees = Vec::new();
    for row in rows {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut employee = Employee::default();
        for (index, field) in &positions {
            if let Some(value) = row.get(*index) {
                employee.set_field(*field, value.clone());
            }
        }
        employees.push(employee);
    }

    Ok(employees)
}
