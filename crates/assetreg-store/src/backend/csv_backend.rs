#![allow(clippy::result_large_err)]

use super::{employees_from_rows, RosterBackend};
use crate::errors::{backend_error, Result};
use assetreg_core::model::{Employee, EMPLOYEE_COLUMNS};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Comma-separated roster with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvBackend;

impl RosterBackend for CsvBackend {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Employee>> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| backend_error("roster_read", self.name(), e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| backend_error("roster_read", self.name(), e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        employees_from_rows(&header, rows)
    }

    fn encode(&self, employees: &[Employee]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(EMPLOYEE_COLUMNS)
            .map_err(|e| backend_error("roster_write", self.name(), e))?;

        for employee in employees {
            writer
                .write_record(employee.to_row())
                .map_err(|e| backend_error("roster_write", self.name(), e))?;
        }

        writer
            .into_inner()
            .map_err(|e| backend_error("roster_write", self.name(), e.error()))
    }
}
