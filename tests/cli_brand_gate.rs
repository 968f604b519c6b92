use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_brand_gate(root: &Path) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_sitegate");
    Command::new(bin)
        .args(["--root"])
        .arg(root)
        .arg("brand-gate")
        .output()
        .unwrap()
}

#[test]
fn test_clean_tree_passes() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/index.html"), "<h1>Ndyra</h1>").unwrap();

    let output = run_brand_gate(dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("BRAND GATE PASS"),
        "expected pass banner; got:\n{}",
        stdout
    );
}

#[test]
fn test_json_data_file_with_legacy_token_fails() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site/assets/data")).unwrap();
    fs::write(
        dir.path().join("site/assets/data/tenants_demo.json"),
        r#"{"tenant": "HIIT56 Downtown"}"#,
    )
    .unwrap();

    let output = run_brand_gate(dir.path());
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("site/assets/data/tenants_demo.json"));
    assert!(stdout.contains("HIIT56"));
    assert!(stdout.contains("BRAND GATE FAIL"));
}

#[test]
fn test_html_with_legacy_token_fails() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/pricing.html"), "Hiit56 pricing").unwrap();

    let output = run_brand_gate(dir.path());
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("site/pricing.html"));
    assert!(stdout.contains("Hiit56"));
}

#[test]
fn test_runs_are_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/a.html"), "HIIT56").unwrap();
    fs::write(dir.path().join("site/b.html"), "HIIT56").unwrap();

    let first = run_brand_gate(dir.path());
    let second = run_brand_gate(dir.path());
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_json_mode_reports_violations() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/index.html"), "HIIT56").unwrap();

    let bin = env!("CARGO_BIN_EXE_sitegate");
    let output = Command::new(bin)
        .args(["--json", "--root"])
        .arg(dir.path())
        .arg("brand-gate")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["event"], "brand_gate");
    assert_eq!(event["status"], "fail");
    assert_eq!(event["failures"], 1);
}
