pub mod asset;
pub mod employee;

pub use asset::{Asset, AssetColumn, AssetFeed, AssetTable};
pub use employee::{Employee, EmployeeField, EmployeePatch, EMPLOYEE_COLUMNS};
