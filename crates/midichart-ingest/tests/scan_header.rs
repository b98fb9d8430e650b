//! Integration tests for file-backed header scanning.

use std::fs;

use midichart_ingest::{input_path_beside, scan_header};
use midichart_model::ChartError;

#[test]
fn scans_mappings_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = input_path_beside(dir.path());
    fs::write(
        &path,
        "#include <stdint.h>\n\
         \n\
         // dial control changes\n\
         const uint8_t PARAM_MC_FILTER_1_FREQ{74};\n\
         const uint8_t PARAM_MC_FILTER_1_RES{71};\n",
    )
    .unwrap();

    let chart = scan_header(&path).unwrap();

    assert_eq!(chart.len(), 2);
    assert_eq!(chart.mappings[0].param, "FILTER_1_FREQ");
    assert_eq!(chart.mappings[1].cc, "71");
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = input_path_beside(dir.path());

    let error = scan_header(&path).unwrap_err();

    match error {
        ChartError::InputRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn file_with_no_matches_yields_an_empty_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = input_path_beside(dir.path());
    fs::write(&path, "#ifndef ConstantValues_h\n#define ConstantValues_h\n#endif\n").unwrap();

    let chart = scan_header(&path).unwrap();

    assert!(chart.is_empty());
}
