use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn usergraph_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("usergraph"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    usergraph_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    usergraph_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("usergraph"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();
    usergraph_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let content = std::fs::read_to_string(dir.path().join(".usergraph.yml")).unwrap();
    assert!(content.contains("port: 5001"));

    usergraph_cmd(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    usergraph_cmd(&dir)
        .args(["--config", "missing.yml", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_seed_counts_come_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".usergraph.yml"),
        "seed:\n  users: 3\n",
    )
    .unwrap();

    let output = usergraph_cmd(&dir)
        .args(["query", "{ users { id } }"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["data"]["users"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let dir = TempDir::new().unwrap();
    usergraph_cmd(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("interface Character"))
        .stdout(predicate::str::contains("scalar DateTime"))
        .stdout(predicate::str::contains("createUser"));
}

// =============================================================================
// Queries and mutations
// =============================================================================

#[test]
fn test_query_user() {
    let dir = TempDir::new().unwrap();
    let output = usergraph_cmd(&dir)
        .args(["query", "{ user(id: 4) { id name age } missing: user(id: 11) { id } }"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["data"]["user"]["id"], "4");
    assert_eq!(json["data"]["user"]["name"], "user 4");
    assert_eq!(json["data"]["user"]["age"], 40.0);
    assert!(json["data"]["missing"].is_null());
}

#[test]
fn test_query_with_variables() {
    let dir = TempDir::new().unwrap();
    let output = usergraph_cmd(&dir)
        .args([
            "query",
            "query($name: String) { droid(name: $name) { name function } }",
            "--variables",
            r#"{"name": "droid 5"}"#,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["data"]["droid"]["function"], "function 5");
}

#[test]
fn test_mutate_create_user() {
    let dir = TempDir::new().unwrap();
    let output = usergraph_cmd(&dir)
        .args([
            "mutate",
            r#"createUser(name: "Alice", age: 30, gender: MALE) { ok user { id name age gender } }"#,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    let payload = &json["data"]["createUser"];
    assert_eq!(payload["ok"], true);
    assert_eq!(payload["user"]["id"], "11");
    assert_eq!(payload["user"]["name"], "Alice");
    assert_eq!(payload["user"]["gender"], "MALE");
}

#[test]
fn test_mutate_missing_argument_reports_error() {
    let dir = TempDir::new().unwrap();
    let output = usergraph_cmd(&dir)
        .args(["mutate", r#"createUser(name: "Alice") { ok }"#])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert!(!json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_mutate_update_unknown_user() {
    let dir = TempDir::new().unwrap();
    let output = usergraph_cmd(&dir)
        .args([
            "mutate",
            r#"updateUser(userData: { id: "9999", name: "Nobody" }) { ok user { id } }"#,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["data"]["updateUser"]["ok"], false);
    assert!(json["data"]["updateUser"]["user"].is_null());
}

#[test]
fn test_invalid_variables_fail() {
    let dir = TempDir::new().unwrap();
    usergraph_cmd(&dir)
        .args(["query", "{ users { id } }", "--variables", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}
