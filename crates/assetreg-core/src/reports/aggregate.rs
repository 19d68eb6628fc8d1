use serde::Serialize;
use std::collections::HashMap;

use super::chart::ChartSeries;
use crate::errors::Result;
use crate::model::{AssetColumn, AssetTable};
use crate::table::Table;

/// Heading of the count column in aggregate tables
pub const COUNT_LABEL: &str = "Count";

/// How category values are compared when grouping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Raw cell values: `Poor` and `poor` are separate groups
    #[default]
    Exact,
    /// Trimmed, lowercased values; the group keeps the first spelling seen
    Normalized,
}

/// Row counts per distinct category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    column: AssetColumn,
    groups: Vec<(String, usize)>,
}

impl CategoryCounts {
    pub fn column(&self) -> AssetColumn {
        self.column
    }

    /// Groups ordered by count descending, then category ascending
    pub fn groups(&self) -> &[(String, usize)] {
        &self.groups
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, n)| n).sum()
    }

    /// Two-column `{<label>, Count}` table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new([self.column.label(), COUNT_LABEL]);
        for (category, count) in &self.groups {
            table.push_row(vec![category.clone(), count.to_string()]);
        }
        table
    }

    /// Chart-ready series indexed by category
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries::new(
            self.column.label(),
            COUNT_LABEL,
            self.groups
                .iter()
                .map(|(c, n)| (c.clone(), *n as u64))
                .collect(),
        )
    }
}

/// Count rows per value of `column`
///
/// Rows with an absent or blank category cell are not counted.
///
/// # Errors
///
/// Returns `MissingColumns` when `column` is absent from the feed.
pub fn aggregate_by(
    table: &AssetTable,
    column: AssetColumn,
    grouping: Grouping,
) -> Result<CategoryCounts> {
    table.require(&[column])?;

    // key -> (display label, count)
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();
    for value in table.rows().iter().filter_map(|a| a.get(column)) {
        let key = match grouping {
            Grouping::Exact => value.to_string(),
            Grouping::Normalized => value.trim().to_lowercase(),
        };
        if key.trim().is_empty() {
            continue;
        }
        let label = match grouping {
            Grouping::Exact => value.to_string(),
            Grouping::Normalized => value.trim().to_string(),
        };
        counts.entry(key).or_insert((label, 0)).1 += 1;
    }

    let mut groups: Vec<(String, usize)> = counts.into_values().collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    tracing::debug!(
        category = column.header(),
        groups = groups.len(),
        ?grouping,
        "category aggregation"
    );

    Ok(CategoryCounts { column, groups })
}
