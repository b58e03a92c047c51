//! CLI contract tests
//!
//! Runs the built binary against the Java fixtures and checks output formats,
//! config discovery and exit codes.

use std::path::{Path, PathBuf};
use std::process::Command;

fn apisig_bin() -> String {
    env!("CARGO_BIN_EXE_apisig").to_string()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy a fixture into a fresh directory so config discovery is isolated
fn setup_source(name: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join(name);
    std::fs::copy(fixture(name), &dest).expect("copy fixture");
    (dir, dest)
}

fn run(args: &[&str], files: &[&Path]) -> (i32, String, String) {
    let mut cmd = Command::new(apisig_bin());
    cmd.args(args);
    for file in files {
        cmd.arg(file);
    }
    let output = cmd.output().expect("Failed to run apisig");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_text_output_lists_signatures() {
    let (_dir, file) = setup_source("TestProxy.java");
    let (code, stdout, _) = run(&["parse"], &[&file]);

    assert_eq!(code, 0);
    assert!(stdout.contains("METHODS (11 total)"), "stdout: {}", stdout);
    assert!(stdout.contains("public String greetWildcard(String[] wildcardNames)"));
}

#[test]
fn test_json_output() {
    let (_dir, file) = setup_source("DisputeGateway.java");
    let (code, stdout, _) = run(&["parse", "--format", "json"], &[&file]);

    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let result = &parsed[0]["result"];
    assert_eq!(result["methods"].as_array().expect("methods").len(), 9);
    assert_eq!(
        result["parameters"]["addFileEvidence"]["documentId"],
        "The document id of a previously uploaded document"
    );
}

#[test]
fn test_api_output() {
    let (_dir, file) = setup_source("DisputeGateway.java");
    let (code, stdout, _) = run(&["parse", "-f", "api"], &[&file]);

    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let api = &parsed[0];
    assert_eq!(api["name"], "dispute-gateway");
    assert_eq!(
        api["description"],
        "Provides methods to interact with Dispute objects"
    );

    let methods = api["methods"].as_array().expect("methods");
    let add = methods
        .iter()
        .find(|m| m["name"] == "addFileEvidence")
        .expect("addFileEvidence");
    assert_eq!(add["signatures"].as_array().expect("signatures").len(), 2);
    assert_eq!(add["options"].as_array().expect("options").len(), 3);
}

#[test]
fn test_inner_path() {
    let (_dir, file) = setup_source("NestedProxy.java");
    let (code, stdout, _) = run(&["parse", "--format", "json", "--inner", "Order"], &[&file]);

    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(
        parsed[0]["result"]["methods"][0],
        "public String getOrderById(int id)"
    );
}

#[test]
fn test_missing_inner_path_fails() {
    let (_dir, file) = setup_source("NestedProxy.java");
    let (code, stdout, _) = run(&["parse", "--inner", "Missing"], &[&file]);

    assert_eq!(code, 1);
    assert!(stdout.contains("Cannot find inner class Missing in class"));
}

#[test]
fn test_unreadable_file_fails_but_others_are_reported() {
    let (dir, file) = setup_source("Box.java");
    let missing = dir.path().join("Missing.java");
    let (code, stdout, stderr) = run(&["parse"], &[&missing, &file]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to read file"), "stderr: {}", stderr);
    assert!(stdout.contains("public Foo get()"));
}

#[test]
fn test_keep_type_variables_flag() {
    let (_dir, file) = setup_source("Box.java");
    let (code, stdout, _) = run(&["parse", "--keep-type-variables"], &[&file]);

    assert_eq!(code, 0);
    assert!(stdout.contains("public T get()"), "stdout: {}", stdout);
}

#[test]
fn test_config_next_to_source_is_used() {
    let (dir, file) = setup_source("Box.java");
    std::fs::write(
        dir.path().join("apisig.toml"),
        "[resolver]\ntype_variables = \"keep\"\n\n[output]\nformat = \"json\"\n",
    )
    .expect("write config");

    let (code, stdout, _) = run(&["parse"], &[&file]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed[0]["result"]["methods"][0], "public T get()");
}

#[test]
fn test_explicit_config_flag() {
    let (dir, file) = setup_source("Box.java");
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[output]\nformat = \"api\"\n").expect("write config");

    let config_arg = config.to_string_lossy().to_string();
    let (code, stdout, _) = run(&["--config", &config_arg, "parse"], &[&file]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed[0]["name"], "box");
}

#[test]
fn test_init_writes_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (code, stdout, _) = run(&["init"], &[dir.path()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Created"));
    let content = std::fs::read_to_string(dir.path().join("apisig.toml")).expect("config written");
    assert!(content.contains("[resolver]"));
}
