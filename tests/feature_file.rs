//! Reading a feature CSV from disk and classifying it.

use std::fs;

use tempfile::tempdir;
use tremor_classifier::{
    batch::{classify_rows, write_predictions},
    ingest::{read_features_path, LABEL_COLUMN},
    ClassifierError, MotionClassifier, FEATURE_NAMES, SCALER_MEANS, SCALER_SCALES,
};

fn window(mav_y: f64, mean_y: f64) -> Vec<String> {
    let mut raw = SCALER_MEANS.to_vec();
    raw[15] += SCALER_SCALES[15] * mav_y;
    raw[8] += SCALER_SCALES[8] * mean_y;
    raw.iter().map(|v| v.to_string()).collect()
}

#[test]
fn classifies_labelled_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("features.csv");
    let output = dir.path().join("predictions.csv");

    let mut header: Vec<&str> = FEATURE_NAMES.to_vec();
    header.push(LABEL_COLUMN);
    let mut lines = vec![header.join(",")];
    for (mav_y, mean_y, label) in [(-1.0, -0.1, "0"), (-1.0, 0.1, "1"), (0.2, -2.0, "0")] {
        let mut cells = window(mav_y, mean_y);
        cells.push(label.to_string());
        lines.push(cells.join(","));
    }
    fs::write(&input, lines.join("\n") + "\n").unwrap();

    let file = read_features_path(&input).unwrap();
    assert!(file.has_label);
    assert_eq!(file.rows.len(), 3);

    let outcome = classify_rows(&MotionClassifier::default(), &file.rows, false);
    assert_eq!(outcome.summary.no_tremor, 1);
    assert_eq!(outcome.summary.tremor, 2);
    assert_eq!(outcome.summary.correct, 2);

    write_predictions(fs::File::create(&output).unwrap(), &outcome.predictions).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "row,class,tremor,expected\n1,0,false,0\n2,1,true,1\n3,1,true,0\n"
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_features_path(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, ClassifierError::Io(_)));
}

#[test]
fn header_without_svm_group_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("partial.csv");
    let header = FEATURE_NAMES[..24].join(",");
    let row = vec!["1.0"; 24].join(",");
    fs::write(&input, format!("{header}\n{row}\n")).unwrap();

    match read_features_path(&input) {
        Err(ClassifierError::MissingColumn(column)) => assert_eq!(column, "mean_svm"),
        other => panic!("expected missing column, got {other:?}"),
    }
}
