use super::{present_columns, project};
use crate::errors::{RegistryError, Result};
use crate::model::{AssetColumn, AssetTable, Employee};
use crate::table::Table;

/// Assets linked to an employee
///
/// Soft join without referential integrity: an asset belongs to the employee
/// when its `Employee ID` equals the employee identifier, or when its
/// responsible officer contains the employee name (case-insensitive). A
/// blank name never matches by officer.
///
/// # Errors
///
/// Returns `MissingColumns` when the feed has neither `Employee ID` nor
/// `Responsible officer`.
pub fn assets_for_employee(table: &AssetTable, employee: &Employee) -> Result<Table> {
    let by_id = table.has_column(AssetColumn::EmployeeId);
    let by_officer = table.has_column(AssetColumn::ResponsibleOfficer);
    if !by_id && !by_officer {
        return Err(RegistryError::MissingColumns {
            columns: vec![
                AssetColumn::EmployeeId.header().to_string(),
                AssetColumn::ResponsibleOfficer.header().to_string(),
            ],
        });
    }

    let id = employee.id.trim();
    let name = employee.name.trim().to_lowercase();

    let hits = table.rows().iter().filter(|asset| {
        let id_match = by_id
            && !id.is_empty()
            && asset
                .get(AssetColumn::EmployeeId)
                .map(|v| v.trim() == id)
                .unwrap_or(false);
        let officer_match = by_officer
            && !name.is_empty()
            && asset
                .get(AssetColumn::ResponsibleOfficer)
                .map(|v| v.to_lowercase().contains(&name))
                .unwrap_or(false);
        id_match || officer_match
    });

    let result = project(hits, &present_columns(table));
    tracing::debug!(employee_id = %employee.id, matches = result.len(), "assets for employee");
    Ok(result)
}
