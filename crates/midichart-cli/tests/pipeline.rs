//! Integration tests for the end-to-end chart pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use midichart_cli::pipeline::run_chart_at;
use midichart_ingest::input_path_beside;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ConstantValues.h")
}

#[test]
fn renders_the_fixture_header() {
    let table = run_chart_at(&fixture_path()).unwrap();

    insta::assert_snapshot!(table, @r"
    | Parameter            | CC |
    | :------------------- | -: |
    | ENV_1_ATTACK         | 73 |
    | ENV_1_DECAY          | 75 |
    | ENV_1_SUSTAIN        | 79 |
    | ENV_1_RELEASE        | 72 |
    | FILTER_1_FREQ        | 74 |
    | FILTER_1_RES         | 71 |
    | FILTER_1_KBD_TRACK   | 20 |
    | FILTER_MODE          | 24 |
    | LFO_FREQ             | 76 |
    | LFO_SHAPE            | 25 |
    | OSC_1_MOD_FREQ_ENV_2 | 80 |
    | OSC_1_UNISON_DETUNE  | 86 |
    ");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = run_chart_at(&fixture_path()).unwrap();
    let second = run_chart_at(&fixture_path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn non_matching_lines_do_not_change_the_output() {
    let baseline = run_chart_at(&fixture_path()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let noisy_path = input_path_beside(dir.path());
    let mut noisy = String::from("// prelude comment\n\n");
    for line in fs::read_to_string(fixture_path()).unwrap().lines() {
        noisy.push_str(line);
        noisy.push('\n');
        noisy.push_str("static const uint8_t UNRELATED{0};\n");
    }
    fs::write(&noisy_path, noisy).unwrap();

    assert_eq!(run_chart_at(&noisy_path).unwrap(), baseline);
}

#[test]
fn header_with_no_mappings_yields_a_minimal_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = input_path_beside(dir.path());
    fs::write(&path, "#include <stdint.h>\n// nothing to see here\n").unwrap();

    let table = run_chart_at(&path).unwrap();

    assert_eq!(table, "| Parameter | CC |\n| :-------- | -: |\n");
}

#[test]
fn missing_input_file_fails_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = input_path_beside(dir.path());

    let error = run_chart_at(&path).unwrap_err();

    let message = error.to_string();
    assert!(message.contains("failed to read input file"), "{message}");
    assert!(message.contains("ConstantValues.h"), "{message}");
}
