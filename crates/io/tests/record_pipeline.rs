//! Integration test: manifest + MAT records through batch residuals and back
//! out as CSV / JSON.

use std::path::Path;

use approx::assert_relative_eq;
use ecgnoise_features::{FeatureError, batch_features, batch_residuals};
use ecgnoise_io::{
    FeatureRecord, RecordFormat, RecordStore, ResidualRecord, read_manifest, write_features_csv,
    write_json, write_residuals_csv,
};
use ecgnoise_wavelet::{BandProcessor, BoundaryMode, OmissionSpec, Wavelet};

/// Writes a little-endian level-4 MAT file holding a 1xN int16 `val` row.
fn write_mat(dir: &Path, name: &str, values: &[i16]) {
    let mut bytes = Vec::new();
    for field in [30i32, 1, values.len() as i32, 0, 4] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.extend_from_slice(b"val\0");
    for v in values {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(dir.join(format!("{name}.mat")), bytes).expect("write mat fixture");
}

fn alternating(n: usize) -> Vec<i16> {
    [0, 1000, 0, -1000].iter().copied().cycle().take(n).collect()
}

#[test]
fn manifest_to_residual_csv() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_mat(dir.path(), "A00001", &alternating(8));
    write_mat(dir.path(), "A00002", &[250; 16]);
    std::fs::write(dir.path().join("RECORDS"), "A00001\nA00002\n\nA00003\n").unwrap();

    let names = read_manifest(&dir.path().join("RECORDS")).expect("manifest");
    assert_eq!(names, vec!["A00001", "A00002"]);

    let store = RecordStore::open(RecordFormat::Mat, dir.path(), "val", 1000.0);
    let processor = BandProcessor::new(Wavelet::Haar, 1).with_mode(BoundaryMode::Constant);
    let residuals = batch_residuals(&names, &store, &processor, &OmissionSpec::new([1], false))
        .expect("batch succeeds");

    // scaled to [0, 1, 0, -1, ...]: half the signal lives in the finest band
    assert_relative_eq!(residuals[0], 0.5, epsilon = 1e-12);
    // a constant record has no detail content
    assert_relative_eq!(residuals[1], 0.0, epsilon = 1e-12);

    let records: Vec<ResidualRecord> = names
        .iter()
        .zip(&residuals)
        .map(|(record, &residual)| ResidualRecord {
            record: record.clone(),
            residual,
        })
        .collect();
    let out = dir.path().join("residuals.csv");
    write_residuals_csv(&out, &records).expect("write csv");

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "record,residual");
    assert!(lines[1].starts_with("A00001,0.5"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn missing_record_aborts_batch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_mat(dir.path(), "A00001", &alternating(16));
    let store = RecordStore::open(RecordFormat::Mat, dir.path(), "val", 1000.0);
    let processor = BandProcessor::new(Wavelet::Haar, 2);

    let err = batch_residuals(
        &["A00001", "A00404", "A00001"],
        &store,
        &processor,
        &OmissionSpec::new([1], false),
    )
    .unwrap_err();
    match err {
        FeatureError::Load { record, reason } => {
            assert_eq!(record, "A00404");
            assert!(reason.contains("A00404.mat"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn features_to_csv_and_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_mat(dir.path(), "A00001", &alternating(64));
    let store = RecordStore::open(RecordFormat::Mat, dir.path(), "val", 1000.0);
    let processor = BandProcessor::new(Wavelet::Db2, 2);

    let features = batch_features(&["A00001"], &store, &processor).expect("features");
    let columns = features[0].column_names();
    assert_eq!(columns.len(), 30);

    let records = vec![FeatureRecord {
        record: "A00001".into(),
        features: features[0].values().to_vec(),
    }];

    let csv = dir.path().join("features.csv");
    write_features_csv(&csv, &columns, &records).expect("write csv");
    let text = std::fs::read_to_string(&csv).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("record,a_min,a_max,a_average"));
    assert_eq!(text.lines().nth(1).unwrap().split(',').count(), 31);

    let json = dir.path().join("features.json");
    write_json(&json, &records).expect("write json");
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(parsed[0]["features"].as_array().unwrap().len(), 30);
}
