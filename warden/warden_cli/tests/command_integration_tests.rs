use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn warden() -> Command {
    let mut cmd = Command::cargo_bin("warden_cli").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_validate_valid_policy() {
    warden()
        .args(["validate", "length(3,255) and regexPattern(^[a-z]+$)"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "policy: length(3,255) and regexPattern(^[a-z]+$)",
        ))
        .stdout(predicate::str::contains("  - regexPattern"));
}

#[test]
fn test_validate_unknown_policy_fails() {
    warden()
        .args(["validate", "length(1,2) and bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username policy not found: bogus"));
}

#[test]
fn test_validate_invalid_config_fails() {
    warden()
        .args(["validate", "regexPattern(()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config for regexPattern"));
}

#[test]
fn test_format_prints_canonical_form() {
    warden()
        .args(["format", "  length(3,255)   and  anything "])
        .assert()
        .success()
        .stdout("length(3,255) and anything\n");
}

#[test]
fn test_providers_lists_builtins() {
    warden()
        .arg("providers")
        .assert()
        .success()
        .stdout("length\nnotEmail\nregexPattern\n");
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warden.toml");
    fs::write(
        &path,
        r#"
log_level = "error"
default_policy = "length and notEmail"

[length]
hard_max = 32
default_max = 32
"#,
    )
    .unwrap();

    warden()
        .arg("--config")
        .arg(&path)
        .args(["validate", "--json"])
        .assert()
        .success()
        .stdout("{\"policy\":\"length and notEmail\",\"clauses\":[\"length\",\"notEmail\"]}\n");

    warden()
        .arg("--config")
        .arg(&path)
        .args(["validate", "length(1,64)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_missing_config_file_fails() {
    warden()
        .args(["--config", "/nonexistent/warden.toml", "providers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
