//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "ACTION[Server]: foo\nACTION[Server]: foo\nACTION[Main]: bar\n";

fn logfold() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("logfold"))
}

#[test]
fn test_cli_version() {
    let mut cmd = logfold();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("logfold"));
}

#[test]
fn test_cli_help() {
    let mut cmd = logfold();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Fold repeated log lines"))
        .stdout(predicate::str::contains("compress"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_compress_uses_default_file_names() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), SAMPLE).expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).arg("compress");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Compressed 4 lines into 3 runs"))
        .stdout(predicate::str::contains("debug extract processed.txt"));

    let output =
        fs::read_to_string(dir.path().join("debug extract processed.txt")).expect("read output");
    similar_asserts::assert_eq!(output, "foo (×2)\nbar\n");
}

#[test]
fn test_compress_explicit_paths() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("server.log");
    let output = dir.path().join("server.folded.log");
    fs::write(&input, "t1 ACTION[Server]: a ACTION[Server]: b\nb\nunique\n").expect("write input");

    let mut cmd = logfold();
    cmd.args([
        "compress",
        input.to_str().expect("utf8 input"),
        "--output",
        output.to_str().expect("utf8 output"),
    ]);
    cmd.assert().success();

    let folded = fs::read_to_string(&output).expect("read output");
    similar_asserts::assert_eq!(folded, "b (×2)\nunique\n");
}

#[test]
fn test_compress_empty_input_writes_empty_output() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), "").expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).arg("compress");
    cmd.assert().success().stdout(predicate::str::contains("Compressed 1 lines into 1 runs"));

    let output =
        fs::read_to_string(dir.path().join("debug extract processed.txt")).expect("read output");
    assert_eq!(output, "");
}

#[test]
fn test_compress_missing_input_fails() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).arg("compress");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed reading input file: debug extract.txt"));
    assert!(!dir.path().join("debug extract processed.txt").exists());
}

#[test]
fn test_compress_missing_output_directory_fails() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("in.log");
    fs::write(&input, SAMPLE).expect("write input");
    let output = dir.path().join("missing").join("out.log");

    let mut cmd = logfold();
    cmd.args([
        "compress",
        input.to_str().expect("utf8 input"),
        "-o",
        output.to_str().expect("utf8 output"),
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("Failed writing output file"));
    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_compress_custom_marker_without_defaults() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("debug extract.txt"),
        "x ACTION[Client]: hi\ny ACTION[Client]: hi\nACTION[Server]: kept\n",
    )
    .expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).args([
        "compress",
        "--marker",
        "ACTION[Client]: ",
        "--no-default-markers",
    ]);
    cmd.assert().success();

    let output =
        fs::read_to_string(dir.path().join("debug extract processed.txt")).expect("read output");
    similar_asserts::assert_eq!(output, "hi (×2)\nACTION[Server]: kept\n");
}

#[test]
fn test_discovered_config_is_applied_and_cli_overrides_it() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("logfold.toml"),
        "input = 'game.log'\noutput = 'game.folded.log'\nmarkers = ['LOG: ']\n",
    )
    .expect("write config");
    fs::write(dir.path().join("game.log"), "1 LOG: a\n2 LOG: a\n").expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).arg("compress");
    cmd.assert().success().stdout(predicate::str::contains("game.folded.log"));
    assert_eq!(
        fs::read_to_string(dir.path().join("game.folded.log")).expect("read output"),
        "a (×2)\n"
    );

    let mut override_cmd = logfold();
    override_cmd.current_dir(dir.path()).args(["compress", "-o", "cli.log"]);
    override_cmd.assert().success();
    assert!(dir.path().join("cli.log").exists());
}

#[test]
fn test_explicit_invalid_config_fails() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("bad.toml");
    fs::write(&config, "markers = [").expect("write config");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).args(["compress", "--config", config.to_str().expect("utf8")]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid TOML syntax"));
}

#[test]
fn test_compress_writes_report() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), SAMPLE).expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).args(["compress", "--report", "out/report.json", "--no-timestamp"]);
    cmd.assert().success().stdout(predicate::str::contains("Report written to out/report.json"));

    let report = fs::read_to_string(dir.path().join("out/report.json")).expect("read report");
    let doc: serde_json::Value = serde_json::from_str(&report).expect("parse report json");
    assert!(doc.get("generated_at").is_none());
    assert_eq!(doc["stats"]["lines_in"], serde_json::json!(4));
    assert_eq!(doc["stats"]["runs_out"], serde_json::json!(3));
    assert_eq!(doc["stats"]["bytes_out"], serde_json::json!(14));
    assert_eq!(doc["stats"]["prefixes_stripped"]["action_server"], serde_json::json!(2));
    assert_eq!(doc["rules"], serde_json::json!(["action_server", "action_main"]));
    assert_eq!(doc["input_sha256"].as_str().map(str::len), Some(64));
}

#[test]
fn test_info_reports_statistics_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), SAMPLE).expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).arg("info");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Lines: 4"))
        .stdout(predicate::str::contains("Runs: 3"))
        .stdout(predicate::str::contains("action_server: 2"))
        .stdout(predicate::str::contains("(×2) foo"));
    assert!(!dir.path().join("debug extract processed.txt").exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), SAMPLE).expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG").args(["--verbose", "compress"]);
    cmd.assert().success().stderr(predicate::str::contains("Encoded 4 lines into 3 runs"));
}

#[test]
fn test_rust_log_applies_without_verbose() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), SAMPLE).expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).env("RUST_LOG", "debug").arg("compress");
    cmd.assert().success().stderr(predicate::str::contains("Encoded 4 lines into 3 runs"));
}

#[test]
fn test_default_log_level_hides_debug_events() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), SAMPLE).expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG").arg("compress");
    cmd.assert().success().stderr(predicate::str::contains("Encoded").not());
}

#[test]
fn test_report_hashes_raw_input_bytes() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("debug extract.txt"), b"ACTION[Server]: a\nok \xff\n")
        .expect("write input");

    let mut cmd = logfold();
    cmd.current_dir(dir.path()).args(["compress", "--report", "report.json"]);
    cmd.assert().success().stderr(predicate::str::contains("not valid UTF-8"));

    let report = fs::read_to_string(dir.path().join("report.json")).expect("read report");
    let doc: serde_json::Value = serde_json::from_str(&report).expect("parse report json");
    assert_eq!(doc["stats"]["bytes_in"], serde_json::json!(23));
    assert_eq!(
        doc["input_sha256"],
        serde_json::json!("d300c48d71197d596be4af1921fd359ae6126aa7d33b4b001e6ef80c80c7c103")
    );
}
