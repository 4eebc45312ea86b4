use serde_json::Value;
use std::process::{Command, Output};
use tempfile::tempdir;

fn fops(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fops"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout_event(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn stderr_event(output: &Output) -> Value {
    serde_json::from_slice(&output.stderr).unwrap()
}

#[test]
fn write_read_delete_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("x.txt");
    let path = path.to_str().unwrap();

    let output = fops(&["write", "--mode", "json", "-p", path, "-c", "hello"]);
    assert!(output.status.success());
    let event = stdout_event(&output);
    assert_eq!(event["type"], "output");
    assert_eq!(event["data"]["bytes"], 5);

    let output = fops(&["read", "--mode", "json", "-p", path]);
    assert!(output.status.success());
    let event = stdout_event(&output);
    assert_eq!(event["data"]["content"], "hello");

    let output = fops(&["delete", "--mode", "json", "-p", path]);
    assert!(output.status.success());
    let event = stdout_event(&output);
    assert_eq!(event["data"]["deleted"], true);

    let output = fops(&["read", "--mode", "json", "-p", path]);
    assert!(!output.status.success());
    let event = stderr_event(&output);
    assert_eq!(event["type"], "error");
    assert!(!event["data"]["message"].as_str().unwrap().is_empty());
}

#[test]
fn read_missing_file_reports_structured_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let output = fops(&["read", "--mode", "json", "-p", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let event = stderr_event(&output);
    assert_eq!(event["type"], "error");
    assert_eq!(event["data"]["code"], "read_failed");
}

#[test]
fn delete_missing_file_reports_structured_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let output = fops(&["delete", "--mode", "json", "-p", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let event = stderr_event(&output);
    assert_eq!(event["data"]["code"], "delete_failed");
}

#[test]
fn second_write_replaces_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("x.txt");
    let path = path.to_str().unwrap();

    let output = fops(&["write", "--mode", "json", "-p", path, "-c", "first version"]);
    assert!(output.status.success());
    let output = fops(&["write", "--mode", "json", "-p", path, "-c", "v2"]);
    assert!(output.status.success());

    let output = fops(&["read", "--mode", "json", "-p", path]);
    let event = stdout_event(&output);
    assert_eq!(event["data"]["content"], "v2");
}

#[test]
fn interactive_read_prints_raw_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("x.txt");
    std::fs::write(&path, "line one\nline two\n").unwrap();

    let output = fops(&["read", "-p", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "line one\nline two\n"
    );
}
