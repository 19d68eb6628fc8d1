#![allow(clippy::result_large_err)]

use crate::errors::{feed_error, Result};
use assetreg_core::errors::ExErrorKind;
use assetreg_core::model::{Asset, AssetColumn, AssetTable};

/// Parse decoded CSV text into an asset table
///
/// Columns are matched by header name (surrounding whitespace ignored);
/// unknown columns are dropped. Short rows leave the trailing columns
/// absent and fully blank rows are skipped.
///
/// # Errors
///
/// Returns `Serialization` when the CSV itself is malformed.
pub fn parse_assets(source: &str, text: &str) -> Result<AssetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let positions: Vec<(usize, AssetColumn)> = reader
        .headers()
        .map_err(|e| feed_error(ExErrorKind::Serialization, source, e))?
        .iter()
        .enumerate()
        .filter_map(|(index, header)| AssetColumn::from_header(header).map(|c| (index, c)))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| feed_error(ExErrorKind::Serialization, source, e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut asset = Asset::default();
        for (index, column) in &positions {
            if let Some(value) = record.get(*index) {
                asset.set(*column, value);
            }
        }
        rows.push(asset);
    }

    let table = AssetTable::new(positions.iter().map(|(_, c)| *c), rows);
    tracing::debug!(
        source,
        columns = positions.len(),
        rows = table.len(),
        "asset feed parsed"
    );
    Ok(table)
}
