// tests/cli.rs
// =============================================================================
// Runs the compiled html-grader binary and checks exit codes and streams:
// the JSON report only ever lands on stdout, errors only on stderr.
// =============================================================================

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

// A command running in `dir` with no HTML_GRADER_* overrides leaking in
fn grader(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("html-grader").unwrap();
    cmd.current_dir(dir)
        .env_remove("HTML_GRADER_CHECKS")
        .env_remove("HTML_GRADER_FILE")
        .env_remove("HTML_GRADER_URL")
        .env_remove("HTML_GRADER_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_report_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1", "h2"]"#).unwrap();
    fs::write(dir.path().join("index.html"), "<html><h1>Hi</h1></html>").unwrap();

    let output = grader(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\n    \"h1\": true,\n    \"h2\": false\n}\n"
    );
}

#[test]
fn test_missing_html_file_exits_one_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();

    let output = grader(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("index.html does not exist"), "stderr: {}", stderr);
}

#[test]
fn test_failed_fetch_exits_one_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("checks.json"), r#"["h1"]"#).unwrap();

    // Nothing listens on the discard port; index.html is absent on purpose
    let output = grader(dir.path())
        .args(["--url", "http://127.0.0.1:9/", "--timeout", "5"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to fetch"), "stderr: {}", stderr);
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = grader(dir.path()).args(["--timeout", "0"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
