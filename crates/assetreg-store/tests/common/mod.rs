use assetreg_core::Employee;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory plus a roster path inside it
#[allow(dead_code)]
pub fn roster_path(file_name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(file_name);
    (dir, path)
}

#[allow(dead_code)]
pub fn jane() -> Employee {
    Employee::new("E1", "Jane Doe")
        .with_department("Finance")
        .with_phone("+44 20 7946 0000")
        .with_email("jane@example.org")
}

#[allow(dead_code)]
pub fn bond() -> Employee {
    Employee::new("007", "James Bond")
        .with_department("Field Ops")
        .with_assigned_assets("Toyota Hilux")
}

/// Write a feed file and return its path
#[allow(dead_code)]
pub fn write_feed(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("Failed to write feed");
    path
}

#[allow(dead_code)]
pub const ASSET_FEED: &str = "\
Asset Description,Current Location,Responsible officer,Asset condition,Financed by/ source of funds,Employee ID
Dell Latitude,HQ,Jane Doe,Good,Grant A,E1
Office chair,HQ,Jane Doe,Poor,Core budget,
Toyota Hilux,Depot,James Bond,Good,Grant A,007
Projector,Boardroom,Facilities,poor,Donation,
";
