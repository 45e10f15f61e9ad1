//! End-to-end tests of the peerwatch binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn peerwatch() -> Command {
    let mut cmd = Command::cargo_bin("peerwatch").unwrap();
    for var in [
        "PEERWATCH_PORT",
        "PEERWATCH_HOST",
        "PEERWATCH_LOG_LEVEL",
        "PEERWATCH_LOG_FORMAT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_commands() {
    peerwatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("network"));
}

#[test]
fn test_version() {
    peerwatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_init_writes_file() {
    let temp = tempfile::tempdir().unwrap();
    let output = temp.path().join("peerwatch.toml");

    peerwatch()
        .args(["config", "init", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"))
        .stdout(predicate::str::contains("kamina"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("[[peers]]"));

    // Second run refuses to overwrite
    peerwatch()
        .args(["config", "init", "-o"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_health_json_in_project_dir() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("server.js"), "").unwrap();
    std::fs::write(temp.path().join("package.json"), r#"{"version": "4.5.6"}"#).unwrap();
    std::fs::write(
        temp.path().join("peerwatch.toml"),
        "[project]\nname = \"blockchain-node\"\n",
    )
    .unwrap();

    let output = peerwatch()
        .current_dir(temp.path())
        .args(["health", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "healthy");
    assert_eq!(report["projectName"], "blockchain-node");
    assert_eq!(report["version"], "4.5.6");
    // server.js, package.json, peerwatch.toml
    assert_eq!(report["fileCount"], 3);
}

#[test]
fn test_health_fails_on_malformed_manifest() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("package.json"), "{").unwrap();

    peerwatch()
        .current_dir(temp.path())
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_malformed_config_is_reported() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("peerwatch.toml"), "[server\n").unwrap();

    peerwatch()
        .current_dir(temp.path())
        .arg("network")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_completions_bash() {
    peerwatch()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("peerwatch"));
}
