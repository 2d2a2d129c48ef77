//! End to end runs of the workcal binary. No test touches the network.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workcal_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("workcal").unwrap()
}

fn fixture() -> String {
    format!("{}/tests/data/slovakia_2023.ics", env!("CARGO_MANIFEST_DIR"))
}

// =============================================================================
// format
// =============================================================================

#[test]
fn format_defaults() {
    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-01"])
        .assert()
        .success()
        .stdout("Nov 01\n");

    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-30"])
        .assert()
        .success()
        .stdout("November 2023\n");

    workcal_cmd()
        .args(["format", "--start", "2023-11-02", "--end", "2023-11-05"])
        .assert()
        .success()
        .stdout("Nov 02 - Nov 05\n");
}

#[test]
fn format_options() {
    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-30", "--no-combine", "--separator", " to "])
        .assert()
        .success()
        .stdout("Nov 01 to Nov 30\n");

    workcal_cmd()
        .args(["format", "--start", "2023-11-02", "--end", "2023-11-05", "--force-combine", "month", "--month-format", "%m/%Y"])
        .assert()
        .success()
        .stdout("11/2023\n");

    workcal_cmd()
        .args(["format", "--start", "2023-11-02", "--end", "2023-11-05", "--format", "%d.%m.%Y"])
        .assert()
        .success()
        .stdout("02.11.2023 - 05.11.2023\n");
}

#[test]
fn empty_unit_format_uses_generic_format() {
    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-01", "--day-format", ""])
        .assert()
        .success()
        .stdout("Nov 01\n");

    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-30", "--month-format", "", "--format", "%d.%m."])
        .assert()
        .success()
        .stdout("01.11.\n");
}

#[test]
fn format_rejects_bad_input() {
    workcal_cmd()
        .args(["format", "--start", "2023-11-31", "--end", "2023-12-01"])
        .assert()
        .failure();

    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-02", "--format", "%H:%M"])
        .assert()
        .failure();

    workcal_cmd()
        .args(["format", "--start", "2023-11-01", "--end", "2023-11-02", "--combine", "year"])
        .assert()
        .failure();
}

// =============================================================================
// workdays
// =============================================================================

#[test]
fn workdays_from_file() {
    let output = workcal_cmd()
        .args(["workdays", "--start", "2023-11-01", "--file", &fixture()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines.first(), Some(&"2023-11-02"));
    assert_eq!(lines.last(), Some(&"2023-11-30"));
    assert!(!lines.contains(&"2023-11-17"));
}

#[test]
fn workdays_as_json_with_custom_week() {
    workcal_cmd()
        .args([
            "workdays", "--start", "2023-11-13", "--end", "2023-11-19",
            "--business-days", "5,6", "--json", "--file", &fixture()
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2023-11-18\""))
        .stdout(predicate::str::contains("2023-11-17").not());
}

#[test]
fn workdays_requires_exactly_one_feed() {
    workcal_cmd()
        .args(["workdays", "--start", "2023-11-01"])
        .assert()
        .failure();

    workcal_cmd()
        .args(["workdays", "--start", "2023-11-01", "--file", &fixture(), "--url", "https://example.com/x.ics"])
        .assert()
        .failure();
}

#[test]
fn workdays_rejects_invalid_week_day() {
    workcal_cmd()
        .args(["workdays", "--start", "2023-11-01", "--business-days", "1,9", "--file", &fixture()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("week day number 9"));
}

#[test]
fn workdays_missing_file_fails() {
    workcal_cmd()
        .args(["workdays", "--start", "2023-11-01", "--file", "no/such/feed.ics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be read"));
}

// =============================================================================
// configuration
// =============================================================================

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("workcal.json");
    let config = format!(
        r#"{{
            "holiday_feeds": [
                {{ "name": "slovakia", "feed_type": "IcalFile", "path": "{}" }},
                {{ "name": "office", "feed_type": "Static", "holidays": [ {{ "date": "2023-11-03", "name": "Office closed" }} ] }}
            ],
            "business_days": [1, 2, 3, 4, 5],
            "range_format": {{ "separator": " .. " }}
        }}"#,
        fixture()
    );
    fs::write(&path, config).unwrap();
    path
}

#[test]
fn named_feeds_from_configuration() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    workcal_cmd()
        .args(["--config", config.to_str().unwrap(), "workdays", "--start", "2023-11-01", "--end", "2023-11-03", "--feed", "slovakia"])
        .assert()
        .success()
        .stdout("2023-11-02\n2023-11-03\n");

    workcal_cmd()
        .args(["--config", config.to_str().unwrap(), "workdays", "--start", "2023-11-01", "--end", "2023-11-03", "--feed", "office"])
        .assert()
        .success()
        .stdout("2023-11-01\n2023-11-02\n");

    workcal_cmd()
        .args(["--config", config.to_str().unwrap(), "workdays", "--start", "2023-11-01", "--feed", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key 'nowhere' not found"));
}

#[test]
fn marker_cannot_override_a_named_feed() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    workcal_cmd()
        .args(["--config", config.to_str().unwrap(), "workdays", "--start", "2023-11-01", "--feed", "slovakia", "--marker", "observance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    workcal_cmd()
        .args(["workdays", "--start", "2023-11-01", "--end", "2023-11-03", "--marker", "PUBLIC HOLIDAY", "--file", &fixture()])
        .assert()
        .success()
        .stdout("2023-11-02\n2023-11-03\n");
}

#[test]
fn range_format_from_configuration() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    workcal_cmd()
        .args(["--config", config.to_str().unwrap(), "format", "--start", "2023-11-02", "--end", "2023-11-05"])
        .assert()
        .success()
        .stdout("Nov 02 .. Nov 05\n");
}
