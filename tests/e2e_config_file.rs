/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Copy the shared fixture into `dir` as `hideout.json`.
fn copy_dataset(dir: &Path) {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hideout.json");
    fs::copy(fixture, dir.join("hideout.json")).unwrap();
}

/// Write `hideout-planner.config.yml` into `dir`.
fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("hideout-planner.config.yml"), content).unwrap();
}

/// Working directory holding the dataset and a config file.
fn project_with_config(content: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    copy_dataset(temp_dir.path());
    write_config(temp_dir.path(), content);
    temp_dir
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_discovered_config_supplies_dataset_and_format() {
    let temp_dir = project_with_config("dataset: hideout.json\nformat: json\n");

    let output = cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["summary", "security-1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["items"][0]["item"], "Roubles");
    assert_eq!(json["summary"]["items"][0]["amount"], 20000);
}

#[test]
fn test_default_dataset_name_without_config() {
    let temp_dir = TempDir::new().unwrap();
    copy_dataset(temp_dir.path());

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["closure", "medstation-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medstation-1"))
        .stdout(predicate::str::contains("vents-1"));
}

#[test]
fn test_cli_format_overrides_config() {
    let temp_dir = project_with_config("format: json\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["--format", "markdown", "summary", "security-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hideout Upgrade Plan"));
}

#[test]
fn test_cli_dataset_overrides_config() {
    let temp_dir = project_with_config("dataset: missing.json\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["--dataset", "hideout.json", "closure", "vents-1"])
        .assert()
        .success();
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    copy_dataset(temp_dir.path());
    let config_path = temp_dir.path().join("custom.yml");
    fs::write(&config_path, "format: markdown\n").unwrap();

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["summary", "vents-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hideout Upgrade Plan"));
}

#[test]
fn test_explicit_config_path_missing() {
    let temp_dir = TempDir::new().unwrap();
    copy_dataset(temp_dir.path());

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["--config", "nope.yml", "stations"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_empty_config_uses_defaults() {
    let temp_dir = project_with_config("");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["summary", "vents-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15,000  Roubles"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_unknown_field_warns_but_runs() {
    let temp_dir = project_with_config("format: text\ntheme: dark\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["closure", "vents-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'theme' will be ignored",
        ));
}

#[test]
fn test_invalid_format_in_config() {
    let temp_dir = project_with_config("format: xml\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("stations")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_malformed_yaml() {
    let temp_dir = project_with_config("format: [json\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("stations")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// Persistence settings
// ============================================================================

#[test]
fn test_state_file_from_config() {
    let temp_dir = project_with_config("state_file: saved.json\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("session")
        .write_stdin("click generator-1\n")
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("saved.json")).unwrap();
    assert!(saved.contains("generator-1,vents-1"));

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: pinned (generator-1)"));
}

#[test]
fn test_persist_false_keeps_selection_in_memory() {
    let temp_dir = project_with_config("persist: false\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("session")
        .write_stdin("click generator-1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: pinned (generator-1)"));

    assert!(!temp_dir
        .path()
        .join("hideout-planner.state.json")
        .exists());

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: none"));
}

#[test]
fn test_color_disabled_when_piped() {
    let temp_dir = project_with_config("color: true\n");

    cargo_bin_cmd!("hideout-planner")
        .current_dir(temp_dir.path())
        .args(["summary", "vents-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
