use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::{RegistryError, Result};

/// A column of the asset feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetColumn {
    Description,
    Location,
    ResponsibleOfficer,
    Condition,
    FundingSource,
    EmployeeId,
}

impl AssetColumn {
    pub const ALL: [AssetColumn; 6] = [
        AssetColumn::Description,
        AssetColumn::Location,
        AssetColumn::ResponsibleOfficer,
        AssetColumn::Condition,
        AssetColumn::FundingSource,
        AssetColumn::EmployeeId,
    ];

    /// Columns shown for search results
    pub const DISPLAY: [AssetColumn; 4] = [
        AssetColumn::Description,
        AssetColumn::Location,
        AssetColumn::ResponsibleOfficer,
        AssetColumn::Condition,
    ];

    /// Header exactly as it appears in the feed
    pub fn header(&self) -> &'static str {
        match self {
            AssetColumn::Description => "Asset Description",
            AssetColumn::Location => "Current Location",
            AssetColumn::ResponsibleOfficer => "Responsible officer",
            AssetColumn::Condition => "Asset condition",
            AssetColumn::FundingSource => "Financed by/ source of funds",
            AssetColumn::EmployeeId => "Employee ID",
        }
    }

    /// Presentation label used for report headings
    pub fn label(&self) -> &'static str {
        match self {
            AssetColumn::Description => "Asset Description",
            AssetColumn::Location => "Current Location",
            AssetColumn::ResponsibleOfficer => "Responsible Officer",
            AssetColumn::Condition => "Asset Condition",
            AssetColumn::FundingSource => "Funding Source",
            AssetColumn::EmployeeId => "Employee ID",
        }
    }

    /// Match a feed header (surrounding whitespace ignored)
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for AssetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for AssetColumn {
    type Err = RegistryError;

    /// Accepts short names used on the command line or full feed headers
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(column) = Self::from_header(s) {
            return Ok(column);
        }
        let key = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match key.as_str() {
            "description" | "desc" => Ok(AssetColumn::Description),
            "location" => Ok(AssetColumn::Location),
            "officer" | "responsibleofficer" => Ok(AssetColumn::ResponsibleOfficer),
            "condition" => Ok(AssetColumn::Condition),
            "funding" | "fundingsource" | "source" => Ok(AssetColumn::FundingSource),
            "employeeid" | "employee" | "id" => Ok(AssetColumn::EmployeeId),
            _ => Err(RegistryError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

/// One asset row; every field is optional because the feed's header is not
/// under local control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub description: Option<String>,
    pub location: Option<String>,
    pub responsible_officer: Option<String>,
    pub condition: Option<String>,
    pub funding_source: Option<String>,
    pub employee_id: Option<String>,
}

impl Asset {
    pub fn get(&self, column: AssetColumn) -> Option<&str> {
        match column {
            AssetColumn::Description => self.description.as_deref(),
            AssetColumn::Location => self.location.as_deref(),
            AssetColumn::ResponsibleOfficer => self.responsible_officer.as_deref(),
            AssetColumn::Condition => self.condition.as_deref(),
            AssetColumn::FundingSource => self.funding_source.as_deref(),
            AssetColumn::EmployeeId => self.employee_id.as_deref(),
        }
    }

    /// Set a cell; blank values are stored as absent
    pub fn set(&mut self, column: AssetColumn, value: &str) {
        let value = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        match column {
            AssetColumn::Description => self.description = value,
            AssetColumn::Location => self.location = value,
            AssetColumn::ResponsibleOfficer => self.responsible_officer = value,
            AssetColumn::Condition => self.condition = value,
            AssetColumn::FundingSource => self.funding_source = value,
            AssetColumn::EmployeeId => self.employee_id = value,
        }
    }

    /// Builder form of [`Asset::set`], handy for fixtures
    pub fn with(mut self, column: AssetColumn, value: &str) -> Self {
        self.set(column, value);
        self
    }
}

/// The loaded asset feed: rows plus the set of columns the header carried
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTable {
    columns: BTreeSet<AssetColumn>,
    rows: Vec<Asset>,
}

impl AssetTable {
    pub fn new(columns: impl IntoIterator<Item = AssetColumn>, rows: Vec<Asset>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    pub fn rows(&self) -> &[Asset] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: AssetColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn columns(&self) -> impl Iterator<Item = AssetColumn> + '_ {
        self.columns.iter().copied()
    }

    /// Check that every column in `required` was present in the header
    ///
    /// # Errors
    ///
    /// Returns `MissingColumns` naming every absent column, in the order given.
    pub fn require(&self, required: &[AssetColumn]) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|c| !self.has_column(**c))
            .map(|c| c.header().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::MissingColumns { columns: missing })
        }
    }
}

/// Session state of the asset feed
///
/// A failed load does not end the session; it disables the reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetFeed {
    Loaded(AssetTable),
    Unavailable { reason: String },
}

impl AssetFeed {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        AssetFeed::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, AssetFeed::Loaded(_))
    }

    /// The loaded table
    ///
    /// # Errors
    ///
    /// Returns `FeedUnavailable` carrying the load failure reason.
    pub fn table(&self) -> Result<&AssetTable> {
        match self {
            AssetFeed::Loaded(table) => Ok(table),
            AssetFeed::Unavailable { reason } => Err(RegistryError::FeedUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}
