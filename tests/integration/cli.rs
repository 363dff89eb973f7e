//! Integration tests for the `lexiscope` binary

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn lexiscope(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexiscope"))
        .args(args)
        .env_remove("LEXISCOPE_CONFIG")
        .output()
        .unwrap()
}

fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_eval_text() {
    let output = lexiscope(&["eval", "a = b + c;", "--no-color"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("== TOKENS =="));
    assert!(stdout.contains("t1 = b + c"));
}

#[test]
fn test_eval_json() {
    let output = lexiscope(&["eval", "int x = 5;", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tac"][0], "x = 5");
    assert_eq!(value["symbolTable"][0]["dataType"], "int");
}

#[test]
fn test_analyze_file() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "demo.cpp", "#include <vector>\nint n = 1;\n");
    let output = lexiscope(&["analyze", file.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tokens"][0]["line"], 2);
}

#[test]
fn test_analyze_missing_file_fails() {
    let output = lexiscope(&["analyze", "/nonexistent/missing.java"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.java"));
}

#[test]
fn test_request_payload() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "App.java", "class App {}");
    let output = lexiscope(&["request", file.to_str().unwrap()]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["language"], "java");
    assert_eq!(value["code"], "class App {}");
}

#[test]
fn test_sample_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = create_test_file(&dir, "lexiscope.json", r#"{ "language": "cpp", "format": "json" }"#);
    let output = lexiscope(&["sample", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let scopes: Vec<_> = value["symbolTable"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["scope"].as_str())
        .collect();
    assert!(scopes.iter().any(|s| s.contains("struct:Counter")));
}

#[test]
fn test_config_flag_wins_over_env() {
    let dir = TempDir::new().unwrap();
    let from_env = create_test_file(&dir, "env.json", r#"{ "language": "java", "format": "text" }"#);
    let from_flag = create_test_file(&dir, "flag.json", r#"{ "language": "cpp", "format": "json" }"#);
    let output = Command::new(env!("CARGO_BIN_EXE_lexiscope"))
        .args(["eval", "bool b = true;", "--config", from_flag.to_str().unwrap()])
        .env("LEXISCOPE_CONFIG", &from_env)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["symbolTable"][0]["dataType"], "bool");
}

#[test]
fn test_version() {
    let output = lexiscope(&["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Lexiscope "));
}
