//! Asset Register Core - in-memory roster and asset report engine
//!
//! This crate provides the domain layer of the asset register:
//! - Employee and asset models with explicitly optional asset columns
//! - The in-memory roster (list/add/update/delete/search by identifier)
//! - The asset report engine (search, condition filter, category counts,
//!   employee/asset join) with chart-ready output
//! - Result tables shared by every operation
//! - The error facility (`ExError`) and logging facility used workspace-wide
//!
//! Persistence lives in `assetreg-store`; nothing here touches the filesystem.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod reports;
pub mod table;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, RegistryError, Result};
pub use model::{
    Asset, AssetColumn, AssetFeed, AssetTable, Employee, EmployeeField, EmployeePatch,
    EMPLOYEE_COLUMNS,
};
pub use ops::{MutationOutcome, Roster};
pub use reports::{CategoryCounts, ChartSeries, Grouping, ReportEngine};
pub use table::Table;
