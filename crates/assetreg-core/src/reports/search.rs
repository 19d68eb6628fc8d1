use super::{present_columns, project};
use crate::errors::Result;
use crate::model::{AssetColumn, AssetTable};
use crate::table::Table;

/// Fields searched when the caller names none
///
/// `Employee ID` is used only when the feed carries it.
pub const DEFAULT_SEARCH_FIELDS: [AssetColumn; 3] = [
    AssetColumn::ResponsibleOfficer,
    AssetColumn::Description,
    AssetColumn::EmployeeId,
];

/// Search assets by free text
///
/// A row matches when `query` is a case-insensitive substring of any of the
/// text `fields`, or equals the `Employee ID` cell exactly (after trimming)
/// when that column is among the fields. Results are projected onto
/// [`AssetColumn::DISPLAY`]. A blank query or no match yields an empty table.
///
/// # Errors
///
/// Returns `MissingColumns` when an explicitly requested field or a display
/// column is absent from the feed.
pub fn search(table: &AssetTable, query: &str, fields: &[AssetColumn]) -> Result<Table> {
    let fields: Vec<AssetColumn> = if fields.is_empty() {
        DEFAULT_SEARCH_FIELDS
            .into_iter()
            .filter(|c| *c != AssetColumn::EmployeeId || table.has_column(*c))
            .collect()
    } else {
        fields.to_vec()
    };

    let mut required = AssetColumn::DISPLAY.to_vec();
    for field in &fields {
        if !required.contains(field) {
            required.push(*field);
        }
    }
    table.require(&required)?;

    let query = query.trim();
    if query.is_empty() {
        return Ok(Table::new(AssetColumn::DISPLAY.iter().map(|c| c.header())));
    }
    let needle = query.to_lowercase();

    let hits = table.rows().iter().filter(|asset| {
        fields.iter().any(|field| match (*field, asset.get(*field)) {
            (_, None) => false,
            (AssetColumn::EmployeeId, Some(id)) => id.trim() == query,
            (_, Some(text)) => text.to_lowercase().contains(&needle),
        })
    });

    let result = project(hits, &AssetColumn::DISPLAY);
    tracing::debug!(query, matches = result.len(), "asset search");
    Ok(result)
}

/// Assets whose condition equals `value`, ignoring case and surrounding
/// whitespace
///
/// Rows keep every column present in the feed.
///
/// # Errors
///
/// Returns `MissingColumns` when the feed has no `Asset condition` column.
pub fn filter_by_condition(table: &AssetTable, value: &str) -> Result<Table> {
    table.require(&[AssetColumn::Condition])?;

    let wanted = value.trim().to_lowercase();
    let columns = present_columns(table);
    if wanted.is_empty() {
        return Ok(project(std::iter::empty(), &columns));
    }

    let hits = table.rows().iter().filter(|asset| {
        asset
            .get(AssetColumn::Condition)
            .map(|c| c.trim().to_lowercase() == wanted)
            .unwrap_or(false)
    });

    let result = project(hits, &columns);
    tracing::debug!(condition = value, matches = result.len(), "condition filter");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegistryError;
    use crate::model::Asset;

    fn feed() -> AssetTable {
        let rows = vec![
            Asset::default()
                .with(AssetColumn::Description, "Dell Laptop")
                .with(AssetColumn::Location, "HQ")
                .with(AssetColumn::ResponsibleOfficer, "Jane Doe")
                .with(AssetColumn::Condition, "Good")
                .with(AssetColumn::FundingSource, "Grant A")
                .with(AssetColumn::EmployeeId, "E1"),
            Asset::default()
                .with(AssetColumn::Description, "Office Chair")
                .with(AssetColumn::Location, "Annex")
                .with(AssetColumn::ResponsibleOfficer, "John Roe")
                .with(AssetColumn::Condition, " poor ")
                .with(AssetColumn::FundingSource, "Budget"),
        ];
        AssetTable::new(AssetColumn::ALL, rows)
    }

    #[test]
    fn test_search_officer_substring_ignores_case() {
        let result = search(&feed(), "JANE", &[AssetColumn::ResponsibleOfficer]).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.columns().len(), AssetColumn::DISPLAY.len());
        assert_eq!(result.rows()[0][0], "Dell Laptop");
    }

    #[test]
    fn test_search_employee_id_is_exact() {
        let table = feed();
        assert_eq!(search(&table, "E1", &[AssetColumn::EmployeeId]).unwrap().len(), 1);
        assert!(search(&table, "E", &[AssetColumn::EmployeeId]).unwrap().is_empty());
    }

    #[test]
    fn test_search_defaults_cover_description() {
        let result = search(&feed(), "chair", &[]).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.rows()[0][2], "John Roe");
    }

    #[test]
    fn test_search_blank_query_is_empty_not_error() {
        let result = search(&feed(), "  ", &[]).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.columns().len(), 4);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        assert!(search(&feed(), "projector", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_search_requested_field_must_exist() {
        let table = AssetTable::new(AssetColumn::DISPLAY, Vec::new());
        let err = search(&table, "E1", &[AssetColumn::EmployeeId]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingColumns {
                columns: vec!["Employee ID".to_string()]
            }
        );
        // defaults silently skip the optional identifier column
        assert!(search(&table, "E1", &[]).is_ok());
    }

    #[test]
    fn test_filter_by_condition_exact_ignoring_case() {
        let table = feed();
        let poor = filter_by_condition(&table, "POOR").unwrap();
        assert_eq!(poor.len(), 1);
        assert_eq!(
            poor.column_values("Asset Description"),
            Some(vec!["Office Chair"])
        );
        assert!(filter_by_condition(&table, "Goo").unwrap().is_empty());
    }

    #[test]
    fn test_filter_requires_condition_column() {
        let table = AssetTable::new([AssetColumn::Description], Vec::new());
        assert!(matches!(
            filter_by_condition(&table, "Good"),
            Err(RegistryError::MissingColumns { .. })
        ));
    }
}
