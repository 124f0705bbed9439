//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseq() -> Command {
    let mut cmd = Command::cargo_bin("fibseq").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("FIBSEQ_POLL_MS")
        .env_remove("FIBSEQ_BATCH_SIZE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    fibseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"))
        .stdout(predicate::str::contains("sequence"))
        .stdout(predicate::str::contains("find"));
}

#[test]
fn version_flag() {
    fibseq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn sequence_of_five() {
    fibseq()
        .args(["sequence", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fibonacci Sequence:\n\n"))
        .stdout(predicate::str::contains("1. 0\n2. 1\n3. 1\n4. 2\n5. 3\n"))
        .stdout(predicate::str::contains(
            "Generation complete! Generated 5 Fibonacci numbers.",
        ));
}

#[test]
fn sequence_quiet_prints_only_lines() {
    fibseq()
        .args(["sequence", "5", "-q"])
        .assert()
        .success()
        .stdout("1. 0\n2. 1\n3. 1\n4. 2\n5. 3\n");
}

#[test]
fn sequence_small_batches_keep_order() {
    let output = fibseq()
        .args(["--batch-size", "3", "sequence", "250", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 250);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{}. ", i + 1)), "line {i}: {line}");
    }
}

#[test]
fn find_position_ten() {
    fibseq()
        .args(["find", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci Number Lookup:"))
        .stdout(predicate::str::contains("Position: 10\n"))
        .stdout(predicate::str::contains("Number of digits: 2\n"))
        .stdout(predicate::str::contains("Result:\n55\n"));
}

#[test]
fn find_quiet_prints_value() {
    fibseq()
        .args(["find", "100", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn find_thousand_digit_count() {
    fibseq()
        .args(["find", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Position: 1,000\n"))
        .stdout(predicate::str::contains("Number of digits: 209\n"));
}

#[test]
fn sequence_rejects_out_of_range() {
    for quantity in ["0", "-1", "100001"] {
        fibseq()
            .args(["sequence", quantity])
            .assert()
            .code(4)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("[ERROR]"));
    }
}

#[test]
fn find_rejects_out_of_range() {
    for position in ["0", "-3", "1000001"] {
        fibseq()
            .args(["find", position])
            .assert()
            .code(4)
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn large_sequence_declined() {
    fibseq()
        .args(["sequence", "20001"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 0").not())
        .stderr(predicate::str::contains("Estimated time: 1-3 minutes"))
        .stderr(predicate::str::contains("[y/N]"));
}

#[test]
fn json_lines_output() {
    let output = fibseq().args(["--json", "sequence", "3"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let kinds: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        kinds,
        [
            "started", "progress", "progress", "batch", "progress", "completed"
        ]
    );
}

#[test]
fn json_point_result() {
    let output = fibseq().args(["find", "94", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8(output.stdout).unwrap().trim()).unwrap();
    assert_eq!(value["type"], "point_result");
    assert_eq!(value["position"], 94);
    assert_eq!(value["value"], "19740274219868223167");
}

#[test]
fn missing_command_prints_help() {
    fibseq()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn completion_bash() {
    fibseq()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}
