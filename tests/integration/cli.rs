//! Integration tests for the transfer-desk binary
//!
//! Every run gets its own data directory and logs to stderr.

use super::common::fixtures::{messi_form_json, temp_data_dir};
use assert_cmd::Command;
use predicates::prelude::*;

fn transfer_desk(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("transfer-desk").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir).arg("--log-stderr");
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_schema_prints_form_description() {
    let dir = temp_data_dir();
    transfer_desk(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"submit_label\": \"Generate Player Data\""))
        .stdout(predicate::str::contains("\"positionDetail\""));
}

#[test]
fn test_first_run_writes_example_config() {
    let dir = temp_data_dir();
    transfer_desk(dir.path()).arg("schema").assert().success();

    let config = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(config.contains("[export]"));
}

#[test]
fn test_collect_stdin_to_stdout() {
    let dir = temp_data_dir();
    let input = format!(
        "{}\n\n{}\n",
        messi_form_json(),
        serde_json::json!({"name": "Rookie", "age": 15, "position": "DEF"})
    );

    transfer_desk(dir.path())
        .arg("collect")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Player Name,Jersey Number,Position,Position Detail,Age,DoB,",
        ))
        .stdout(predicate::str::contains(
            "L. Messi,10,ATT,\"ST, LW\",36,,40,True,60,Accepted Deal\n",
        ))
        .stdout(predicate::str::contains(
            "Rookie,,DEF,,15,,0,False,0,Accepted Deal\n",
        ));
}

#[test]
fn test_collect_file_to_file() {
    let dir = temp_data_dir();
    let input = dir.path().join("players.jsonl");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, format!("{}\n", messi_form_json())).unwrap();

    transfer_desk(dir.path())
        .arg("collect")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_collect_rejects_out_of_range_age() {
    let dir = temp_data_dir();
    let mut form = messi_form_json();
    form["age"] = 14.into();

    transfer_desk(dir.path())
        .arg("collect")
        .write_stdin(format!("{}\n", form))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("age must be between 15 and 50, got 14"));
}

#[test]
fn test_invalid_config_fails_startup() {
    let dir = temp_data_dir();
    std::fs::write(dir.path().join("config.toml"), "[server]\nmax_sessions = 0\n").unwrap();

    transfer_desk(dir.path())
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_sessions"));
}
