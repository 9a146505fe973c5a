//! Golden tests for combiner
//!
//! The sample project under tests/fixtures exercises both exclusion rules and
//! an undecodable file; its combined document must match the checked-in
//! expected file byte for byte.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

fn combiner_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("combiner"))
}

#[test]
fn golden_sample_project_document() {
    let out = tempdir().unwrap();
    let output = out.path().join("combined.txt");

    combiner_cmd()
        .current_dir(sample_project())
        .arg("--no-color")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let expected = fs::read(fixtures_dir().join("sample_project.expected.txt")).unwrap();
    let actual = fs::read(&output).unwrap();
    assert_eq!(
        String::from_utf8_lossy(&actual),
        String::from_utf8_lossy(&expected)
    );
}

#[test]
fn golden_sample_project_console() {
    let out = tempdir().unwrap();
    let output = out.path().join("combined.txt");

    let assert = combiner_cmd()
        .current_dir(sample_project())
        .arg("--no-color")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6, "unexpected console output:\n{}", stdout);
    assert_eq!(lines[0], "Processing file: ./README.md");
    assert_eq!(lines[1], "Processing file: ./logo.bin");
    assert!(lines[2].starts_with("Could not read ./logo.bin: invalid UTF-8 at byte 0"));
    assert_eq!(lines[3], "Processing file: ./docs/notes.txt");
    assert_eq!(lines[4], "Processing file: ./src/main.rs");
    assert!(lines[5].starts_with("All files (excluding gantt) have been exported to "));
    assert!(lines[5].ends_with("(3 included, 2 skipped, 1 failed)."));
}

#[test]
fn golden_sample_project_jsonl_report() {
    let out = tempdir().unwrap();
    let output = out.path().join("combined.txt");

    let assert = combiner_cmd()
        .current_dir(sample_project())
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("jsonl")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let items: Vec<Value> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("valid jsonl line"))
        .collect();

    let summary: Vec<(&str, &str)> = items
        .iter()
        .map(|v| (v["path"].as_str().unwrap(), v["status"].as_str().unwrap()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("./README.md", "included"),
            ("./logo.bin", "failed"),
            ("./docs/notes.txt", "included"),
            ("./src/GanttView.tsx", "skipped"),
            ("./src/main.rs", "included"),
            ("./src/gantt", "skipped"),
        ]
    );
    assert_eq!(items[3]["reason"], "excluded_name");
    assert_eq!(items[5]["reason"], "excluded_dir");
    assert_eq!(items[0]["hash"].as_str().unwrap().len(), 16);
}

#[test]
fn golden_repeat_runs_are_byte_identical() {
    let out = tempdir().unwrap();
    let output = out.path().join("combined.txt");

    let run = || {
        combiner_cmd()
            .current_dir(sample_project())
            .arg("--quiet")
            .arg("--output")
            .arg(&output)
            .assert()
            .success();
        fs::read(&output).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}
