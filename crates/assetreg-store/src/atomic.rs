//! Atomic write primitives
//!
//! Uses temp→rename so a failed save never leaves a truncated roster

#![allow(clippy::result_large_err)]

use crate::errors::{io_error_at, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically replace `target_path` with `content`
///
/// The temp file sits next to the target (same filesystem) and keeps the
/// full file name, so `staff.csv` and `staff.xlsx` never share a temp path.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error_at("create_roster_dir", parent, e))?;
    }

    let temp_path = temp_path_for(target_path);

    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error_at("write_roster_temp", &temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error_at("rename_roster_temp", target_path, e));
    }

    tracing::debug!(path = %target_path.display(), size_bytes = content.len(), "atomic write");
    Ok(())
}

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target_path.file_name().unwrap_or_default());
    name.push(".tmp");
    target_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("staff.csv");

        atomic_write(&target, b"hello").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"hello");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("staff.csv");

        atomic_write(&target, b"a much longer first version").unwrap();
        atomic_write(&target, b"short").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"short");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("data").join("staff.xlsx");

        atomic_write(&target, b"nested").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"nested");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("staff.csv");

        atomic_write(&target, b"clean").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count();

        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        let temp = temp_path_for(Path::new("/srv/staff.xlsx"));
        assert_eq!(temp, PathBuf::from("/srv/.staff.xlsx.tmp"));
    }
}
