//! Asset report engine
//!
//! Read-only queries over the asset feed: text search, condition filter,
//! category counts with a chart series, and the employee/asset soft join.
//!
//! Every operation is a pure function of (table, parameters). Column
//! presence is validated before any row is touched, so a feed with a
//! different header yields `MissingColumns` rather than a partial result.
//! `ReportEngine` wraps the session's [`AssetFeed`] so that an unavailable
//! feed disables every report with `FeedUnavailable`.

pub mod aggregate;
pub mod chart;
pub mod join;
pub mod search;

pub use aggregate::{aggregate_by, CategoryCounts, Grouping};
pub use chart::ChartSeries;
pub use join::assets_for_employee;
pub use search::{filter_by_condition, search, DEFAULT_SEARCH_FIELDS};

use crate::errors::Result;
use crate::model::{Asset, AssetColumn, AssetFeed, AssetTable, Employee};
use crate::table::Table;

/// Project asset rows onto the given columns, headed by feed headers
pub(crate) fn project<'a>(rows: impl Iterator<Item = &'a Asset>, columns: &[AssetColumn]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| c.header()));
    for asset in rows {
        table.push_row(
            columns
                .iter()
                .map(|c| asset.get(*c).unwrap_or("").to_string())
                .collect(),
        );
    }
    table
}

/// Columns of `table` in canonical order
pub(crate) fn present_columns(table: &AssetTable) -> Vec<AssetColumn> {
    AssetColumn::ALL
        .into_iter()
        .filter(|c| table.has_column(*c))
        .collect()
}

/// Report operations bound to one session's asset feed
#[derive(Debug, Clone)]
pub struct ReportEngine {
    feed: AssetFeed,
}

impl ReportEngine {
    pub fn new(feed: AssetFeed) -> Self {
        Self { feed }
    }

    pub fn feed(&self) -> &AssetFeed {
        &self.feed
    }

    /// The whole feed, every present column
    pub fn all(&self) -> Result<Table> {
        let table = self.feed.table()?;
        Ok(project(table.rows().iter(), &present_columns(table)))
    }

    pub fn search(&self, query: &str, fields: &[AssetColumn]) -> Result<Table> {
        search(self.feed.table()?, query, fields)
    }

    pub fn filter_by_condition(&self, value: &str) -> Result<Table> {
        filter_by_condition(self.feed.table()?, value)
    }

    pub fn aggregate_by(&self, column: AssetColumn, grouping: Grouping) -> Result<CategoryCounts> {
        aggregate_by(self.feed.table()?, column, grouping)
    }

    pub fn assets_for_employee(&self, employee: &Employee) -> Result<Table> {
        assets_for_employee(self.feed.table()?, employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegistryError;

    #[test]
    fn test_unavailable_feed_disables_every_report() {
        let engine = ReportEngine::new(AssetFeed::unavailable("connection refused"));
        let expected = RegistryError::FeedUnavailable {
            reason: "connection refused".to_string(),
        };

        assert_eq!(engine.all().unwrap_err(), expected);
        assert_eq!(engine.search("x", &[]).unwrap_err(), expected);
        assert_eq!(engine.filter_by_condition("Poor").unwrap_err(), expected);
        assert_eq!(
            engine
                .aggregate_by(AssetColumn::Condition, Grouping::Exact)
                .unwrap_err(),
            expected
        );
        assert_eq!(
            engine
                .assets_for_employee(&Employee::new("E1", "Jane"))
                .unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_all_projects_present_columns_only() {
        let table = AssetTable::new(
            [AssetColumn::Condition, AssetColumn::Description],
            vec![Asset::default()
                .with(AssetColumn::Description, "Desk")
                .with(AssetColumn::Condition, "Good")],
        );
        let engine = ReportEngine::new(AssetFeed::Loaded(table));

        let all = engine.all().unwrap();
        assert_eq!(all.columns(), ["Asset Description", "Asset condition"]);
        assert_eq!(all.rows()[0], vec!["Desk", "Good"]);
    }
}
