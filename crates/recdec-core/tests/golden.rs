use std::fs;
use std::path::Path;

use recdec_core::{Report, Schema, report_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str, schema: Schema) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input = root.join(dir).join("input.bin");
    let expected = load_expected_report(dir);

    let mut actual = report_file(&input, schema).expect("decode input");
    actual.generated_at = expected.generated_at.clone();
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_flat_everything() {
    run_golden("tests/golden/flat_everything", Schema::Flat);
}

#[test]
fn golden_flat_empty() {
    run_golden("tests/golden/flat_empty", Schema::Flat);
}

#[test]
fn golden_graph_small() {
    run_golden("tests/golden/graph_small", Schema::Graph);
}

#[test]
fn golden_graph_empty() {
    run_golden("tests/golden/graph_empty", Schema::Graph);
}

#[test]
fn golden_flat_everything_totals() {
    let report = load_expected_report("tests/golden/flat_everything");
    let recdec_core::Summary::Flat(summary) = &report.summary else {
        panic!("expected flat summary");
    };
    assert_eq!(summary.numbers_total, 12);
    assert_eq!(summary.int_array_total, 0);
    assert!(summary.z);
}

#[test]
fn golden_graph_small_totals() {
    let report = load_expected_report("tests/golden/graph_small");
    let recdec_core::Summary::Graph(totals) = &report.summary else {
        panic!("expected graph summary");
    };
    assert_eq!(totals[0].name, "g0");
    assert_eq!(totals[0].adjacency_totals, vec![6, 2]);
}
