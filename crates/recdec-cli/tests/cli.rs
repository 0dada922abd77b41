use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("recdec"))
}

// numbers=[3,-1,4,1,5], z=true, str_array=["ab","c"], int_array=[10,-10]
const FLAT_BODY: &[u8] = &[
    0x0a, 0x06, 0x01, 0x08, 0x02, 0x0a, 0x01, 0x04, 0x04, 0x61, 0x62, 0x02, 0x63, 0x04, 0x14,
    0x13,
];

// one graph "g0" with adjacencies (1, [2,3]) and (2, [])
const GRAPH_BODY: &[u8] = &[
    0x02, 0x04, 0x67, 0x30, 0x04, 0x02, 0x04, 0x04, 0x06, 0x04, 0x00,
];

fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write input fixture");
    path
}

#[test]
fn help_covers_decode() {
    cmd().arg("decode").arg("--help").assert().success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(missing)
        .arg("--schema")
        .arg("flat")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn stdout_outputs_json_report() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);

    let assert = cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("flat")
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["schema"], "flat");
    assert_eq!(value["summary"]["numbers_total"], 12);
    assert_eq!(value["body"]["numbers"][0], 3);
}

#[test]
fn graph_schema_reports_adjacency_totals() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "graphs.bin", GRAPH_BODY);

    let assert = cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("graph")
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["body"]["graphs"][0]["name"], "g0");
    assert_eq!(value["summary"][0]["adjacency_totals"][0], 6);
    assert_eq!(value["summary"][0]["adjacency_totals"][1], 2);
}

#[test]
fn schema_mismatch_fails_with_decode_error() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("graph")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("decode failed").and(contains("hint:")));
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("flat")
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("flat")
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn report_file_is_written() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("flat")
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let json = std::fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["report_version"], 1);
    assert_eq!(value["input"]["bytes"], 16);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--schema")
        .arg("flat")
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_input(&temp, "body.bin", FLAT_BODY);

    cmd()
        .arg("decode")
        .arg(&input)
        .arg("--schema")
        .arg("flat")
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("report path must differ from input"));
}
