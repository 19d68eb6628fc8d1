//! CLI integration tests
//!
//! These tests drive the `assetreg` binary inside a temp directory so no
//! config file, `.env` or roster from the developer's tree leaks in.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const ASSET_FEED: &str = "\
Asset Description,Current Location,Responsible officer,Asset condition,Financed by/ source of funds,Employee ID
Dell Latitude,HQ,Jane Doe,Good,Grant A,E1
Office chair,HQ,Jane Doe,Poor,Core budget,
Toyota Hilux,Depot,James Bond,Good,Grant A,007
Projector,Boardroom,Facilities,poor,Donation,
";

fn assetreg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assetreg"))
        .current_dir(dir)
        .env_remove("ASSETREG_ROSTER")
        .env_remove("ASSETREG_ASSETS")
        .env_remove("ASSETREG_LOG_PROFILE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn ids(table: &Value) -> Vec<String> {
    table["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row[0].as_str().unwrap_or_default().to_string())
        .collect()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        stderr(output)
    );
}

#[test]
fn test_employee_add_list_delete_round() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let added = assetreg(
        dir,
        &["--roster", "staff.csv", "employee", "add", "--id", "E1", "--name", "Jane Doe"],
    );
    assert_success(&added);
    assert!(stdout(&added).contains("Employee 'E1' added."));

    let listed = assetreg(dir, &["--roster", "staff.csv", "--json", "employee", "list"]);
    assert_success(&listed);
    assert_eq!(ids(&json(&listed)), vec!["E1"]);

    let deleted = assetreg(dir, &["--roster", "staff.csv", "employee", "delete", "E1"]);
    assert_success(&deleted);

    let again = assetreg(
        dir,
        &["--roster", "staff.csv", "--json", "employee", "delete", "E1"],
    );
    assert_success(&again);
    assert_eq!(json(&again)["status"], "not_found");

    let text = fs::read_to_string(dir.join("staff.csv")).unwrap();
    assert_eq!(text, "Employee ID,Name,Department,Phone,Email,Assigned Assets\n");
}

#[test]
fn test_feed_flag_never_reaches_roster_rows() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("assets.csv"), ASSET_FEED).unwrap();

    assert_success(&assetreg(
        dir,
        &[
            "--roster", "staff.csv", "--assets", "assets.csv",
            "employee", "add", "--id", "E1", "--name", "Jane", "--assigned-assets", "Laptop",
        ],
    ));
    assert_success(&assetreg(
        dir,
        &["--roster", "staff.csv", "--assets", "assets.csv", "employee", "edit", "E1", "--name", "Janet"],
    ));
    assert_success(&assetreg(
        dir,
        &["--roster", "staff.csv", "--assets", "assets.csv", "employee", "add", "--id", "E2"],
    ));

    let text = fs::read_to_string(dir.join("staff.csv")).unwrap();
    assert_eq!(
        text,
        "Employee ID,Name,Department,Phone,Email,Assigned Assets\n\
         E1,Janet,,,,Laptop\n\
         E2,,,,,\n"
    );
}

#[test]
fn test_blank_id_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = assetreg(
        temp_dir.path(),
        &["--roster", "staff.csv", "employee", "add", "--id", "  "],
    );

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error: [ERR_INVALID_INPUT]"));
    assert!(err.contains("[request "), "error should carry the request id: {}", err);
}

#[test]
fn test_edit_unknown_id_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = assetreg(
        temp_dir.path(),
        &["--roster", "staff.csv", "employee", "edit", "E404", "--name", "X"],
    );

    assert_success(&output);
    assert!(stdout(&output).contains("Employee ID 'E404' not found."));
}

#[test]
fn test_xlsx_roster_keeps_leading_zeros() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    assert_success(&assetreg(
        dir,
        &["employee", "add", "--id", "007", "--name", "James Bond", "--department", "Field Ops"],
    ));
    // default roster file name
    assert!(dir.join("employees.xlsx").exists());

    let found = assetreg(
        dir,
        &["--json", "employee", "search", "--by", "department", "field"],
    );
    assert_success(&found);
    assert_eq!(ids(&json(&found)), vec!["007"]);
}

#[test]
fn test_config_file_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("assetreg.toml"), "roster = \"from-config.csv\"\n").unwrap();

    assert_success(&assetreg(dir, &["employee", "list"]));

    assert!(dir.join("from-config.csv").exists());
    assert!(!dir.join("employees.xlsx").exists());
}

#[test]
fn test_condition_counts_with_chart() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("assets.csv"), ASSET_FEED).unwrap();

    let output = assetreg(
        dir,
        &["--assets", "assets.csv", "report", "count", "--by", "condition", "--chart"],
    );
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.starts_with("Asset Condition  Count\n"));
    assert!(text.contains("Good             2"));
    assert!(text.contains('█'));

    let normalized = assetreg(
        dir,
        &["--assets", "assets.csv", "--json", "report", "count", "--by", "condition", "--normalize"],
    );
    assert_success(&normalized);
    let body = json(&normalized);
    assert_eq!(
        body["table"]["rows"],
        serde_json::json!([["Good", "2"], ["Poor", "2"]])
    );
    assert!(body.get("chart").is_none());
}

#[test]
fn test_report_search_and_condition() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("assets.csv"), ASSET_FEED).unwrap();

    let found = assetreg(
        dir,
        &["--assets", "assets.csv", "--json", "report", "search", "jane", "--field", "officer"],
    );
    assert_success(&found);
    let body = json(&found);
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["columns"][2], "Responsible officer");

    let poor = assetreg(
        dir,
        &["--assets", "assets.csv", "--json", "report", "condition", " POOR "],
    );
    assert_success(&poor);
    assert_eq!(json(&poor)["rows"].as_array().map(Vec::len), Some(2));

    let none = assetreg(dir, &["--assets", "assets.csv", "report", "search", "   "]);
    assert_success(&none);
    assert!(stdout(&none).contains("(0 rows)"));
}

#[test]
fn test_report_without_feed_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = assetreg(temp_dir.path(), &["report", "condition", "Good"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[ERR_FEED_UNAVAILABLE]"));
    assert!(err.contains("Asset feed is not loaded"));
    assert!(err.contains("[request "));
}

#[test]
fn test_missing_feed_column_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("assets.csv"), "Asset Description,Current Location\nLaptop,HQ\n").unwrap();

    let output = assetreg(
        dir,
        &["--assets", "assets.csv", "report", "count", "--by", "funding"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing required columns: Financed by/ source of funds"));
}

#[test]
fn test_assigned_assets_for_employee() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("assets.csv"), ASSET_FEED).unwrap();

    assert_success(&assetreg(
        dir,
        &["--roster", "staff.csv", "employee", "add", "--id", "E1", "--name", "Jane Doe"],
    ));

    let output = assetreg(
        dir,
        &["--roster", "staff.csv", "--assets", "assets.csv", "--json", "report", "assigned", "E1"],
    );
    assert_success(&output);
    let body = json(&output);
    assert_eq!(body[0]["employee_id"], "E1");
    assert_eq!(
        body[0]["table"]["rows"].as_array().map(Vec::len),
        Some(2),
        "Dell Latitude by ID and Office chair by officer name"
    );
}
