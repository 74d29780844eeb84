use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("rti").unwrap()
}

#[test]
fn states_lists_slugs() {
    cmd()
        .arg("states")
        .assert()
        .success()
        .stdout(contains("nagaland"))
        .stdout(contains("telangana"));
}

#[test]
fn states_json() {
    let output = cmd().args(["--json", "states"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["states"], serde_json::json!(["nagaland", "telangana"]));
}

#[test]
fn show_is_case_insensitive() {
    let output = cmd().args(["show", "TELANGANA"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["commission"], "Telangana State Information Commission (TSIC)");
    assert_eq!(v["designTheme"], "telangana");
    assert_eq!(v["fee"], "₹10");
}

#[test]
fn show_unknown_state_fails() {
    cmd()
        .args(["show", "nonexistent-xyz"])
        .assert()
        .failure()
        .stderr(contains("state not found"));
}

#[test]
fn sections_prints_totals() {
    cmd()
        .args(["sections", "rajasthan"])
        .assert()
        .success()
        .stdout(contains("27 departments in 10 sections"));
}

#[test]
fn validate_passes_in_strict_mode() {
    cmd()
        .args(["--strict", "validate"])
        .assert()
        .success()
        .stdout(contains("sections.unpaired"));
}

fn nagaland_payload(dir: &std::path::Path, edit: impl FnOnce(&mut serde_json::Value)) -> std::path::PathBuf {
    let shown = cmd().args(["show", "nagaland"]).output().unwrap();
    let mut record: serde_json::Value = serde_json::from_slice(&shown.stdout).unwrap();
    edit(&mut record);
    let path = dir.join("nagaland.json");
    fs::write(&path, serde_json::to_vec(&record).unwrap()).unwrap();
    path
}

#[test]
fn validate_lists_every_failing_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = nagaland_payload(dir.path(), |r| {
        r["hero"]["image"] = serde_json::json!("");
        r["hero"]["cta"] = serde_json::json!("");
    });

    cmd()
        .args(["validate", "--payload"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("nagaland.hero.image"))
        .stdout(contains("nagaland.hero.cta"))
        .stdout(contains("2 failing finding(s)"))
        .stderr(contains("validation failed"));
}

#[test]
fn validate_json_reports_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = nagaland_payload(dir.path(), |r| {
        r["hero"]["image"] = serde_json::json!("");
        r["hero"]["cta"] = serde_json::json!("");
    });

    let output = cmd()
        .args(["--json", "validate", "--payload"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["ok"], false);
    assert_eq!(v["failures"], 2);
    let subjects: Vec<&str> = v["findings"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["level"] == "error")
        .map(|f| f["subject"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, vec!["nagaland.hero.image", "nagaland.hero.cta"]);
}

#[test]
fn validate_json_ok_for_builtin_content() {
    let output = cmd().args(["--json", "validate"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["ok"], true);
    assert_eq!(v["failures"], 0);
}

#[test]
fn unknown_default_theme_is_rejected() {
    cmd()
        .args(["--default-theme", "neon", "states"])
        .assert()
        .failure()
        .stderr(contains("unsupported design theme"));
}

#[test]
fn export_writes_states_and_index() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["export", "--out"])
        .arg(dir.path())
        .assert()
        .success();

    let nagaland = fs::read_to_string(dir.path().join("nagaland.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&nagaland).unwrap();
    assert_eq!(v["departments"].as_array().unwrap().len(), 33);
    assert!(dir.path().join("telangana.json").exists());

    assert!(dir.path().join("sections/jammu-and-kashmir.json").exists());
    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("index.json")).unwrap()).unwrap();
    assert_eq!(index["states"], serde_json::json!(["nagaland", "telangana"]));
    assert!(index["jurisdictions"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("rajasthan")));
}

#[test]
fn merge_prefers_payload() {
    let dir = tempfile::tempdir().unwrap();
    let shown = cmd().args(["show", "nagaland"]).output().unwrap();
    let mut record: serde_json::Value = serde_json::from_slice(&shown.stdout).unwrap();
    record["fee"] = serde_json::json!("₹50");
    let path = dir.path().join("nagaland.json");
    fs::write(&path, serde_json::to_vec(&record).unwrap()).unwrap();

    let output = cmd().arg("merge").arg(&path).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["fee"], "₹50");
    assert_eq!(v["commission"], "Nagaland Information Commission");
}

#[test]
fn merge_rejects_invalid_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"name": "Goa"}"#).unwrap();
    cmd()
        .arg("merge")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("payload rejected"));
}
