//! CLI Interface Tests
//!
//! These tests drive the impt binary end to end: the results table, JSON
//! output, coded diagnostics from `check`, and `init`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build an impt command isolated from the caller's environment and config.
fn impt(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_impt"));
    cmd.current_dir(dir)
        .env_remove("IMPT_VERBOSE")
        .env_remove("IMPT_CONFIG")
        .arg("--no-color");
    cmd
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    impt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("lex"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    impt(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("impt"));
}

#[test]
fn test_lex_prints_results_table() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "main.imp", "let total = 42;\n");

    impt(dir.path())
        .arg("lex")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Line | Lexeme"))
        .stdout(predicate::str::contains("| let    | Keyword"))
        .stdout(predicate::str::contains("| 42     | IntegerLiteral | 42"))
        .stdout(predicate::str::contains("Errors").not());
}

#[test]
fn test_lex_succeeds_with_lexical_errors() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "bad.imp", "x @ y");

    impt(dir.path())
        .arg("lex")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors (1):"))
        .stdout(predicate::str::contains("1:3  InvalidCharacter"));
}

#[test]
fn test_lex_json_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "main.imp", "name = \"ok\" // done");

    let output = impt(dir.path())
        .args(["lex", "--format", "json"])
        .arg(&path)
        .output()
        .expect("Failed to run impt");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should be one JSON document");
    let tokens = value["tokens"].as_array().expect("tokens should be an array");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[2]["attribute"], "ok");
    assert_eq!(tokens[3]["token_kind"], "Comment");
    assert_eq!(value["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_lex_no_comments_flag() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "main.imp", "x /* note */ y");

    impt(dir.path())
        .args(["lex", "--no-comments"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment").not());
}

#[test]
fn test_lex_multiple_files_have_headers() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let first = write_source(&dir, "a.imp", "a");
    let second = write_source(&dir, "b.imp", "b");

    impt(dir.path())
        .arg("lex")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("==> {} <==", first.display())))
        .stdout(predicate::str::contains(format!("==> {} <==", second.display())));
}

#[test]
fn test_lex_missing_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    impt(dir.path())
        .args(["lex", "missing.imp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path is not a file"));
}

#[test]
fn test_lex_uses_config_format() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "main.imp", "x");
    std::fs::write(
        dir.path().join("impt.toml"),
        "[display]\nformat = \"json\"\n",
    )
    .expect("Failed to write config");

    impt(dir.path())
        .arg("lex")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_check_clean_file_succeeds() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "ok.imp", "fn main() { return 0; }");

    impt(dir.path())
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("error[").not());
}

#[test]
fn test_check_reports_diagnostics_and_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_source(&dir, "bad.imp", "let s = \"open");

    impt(dir.path())
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1002]"))
        .stderr(predicate::str::contains("LexicalErrors(1)"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    impt(dir.path()).arg("init").assert().success();
    let config = std::fs::read_to_string(dir.path().join("impt.toml"))
        .expect("impt.toml should exist");
    assert!(config.contains("[display]"));

    impt(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    impt(dir.path()).args(["init", "--force"]).assert().success();
}
