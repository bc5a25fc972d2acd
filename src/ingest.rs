//! Reading feature rows from CSV.
//!
//! Columns are matched by header name, so the file may order them freely.
//! An optional `label` column carries the expected class.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::classifier::ClassLabel;
use crate::error::{ClassifierError, Result};
use crate::features::{index_of, FEATURE_COUNT, FEATURE_NAMES};

pub const LABEL_COLUMN: &str = "label";

/// Label code written for windows whose class is unknown.
pub const UNLABELLED: i64 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// 1-based position among the data rows of the file.
    pub row: u64,
    pub values: Vec<f64>,
    pub expected: Option<ClassLabel>,
}

/// Where each feature lives in the file's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMap {
    features: [usize; FEATURE_COUNT],
    label: Option<usize>,
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut features = [None; FEATURE_COUNT];
        let mut label = None;

        for (column, name) in headers.iter().enumerate() {
            let slot = if name == LABEL_COLUMN {
                &mut label
            } else {
                match index_of(name) {
                    Some(idx) => &mut features[idx],
                    None => {
                        warn!(column = name, "ignoring unknown column");
                        continue;
                    }
                }
            };
            if slot.is_some() {
                return Err(ClassifierError::DuplicateColumn(name.to_string()));
            }
            *slot = Some(column);
        }

        let mut resolved = [0; FEATURE_COUNT];
        for (idx, slot) in features.iter().enumerate() {
            resolved[idx] = slot
                .ok_or_else(|| ClassifierError::MissingColumn(FEATURE_NAMES[idx].to_string()))?;
        }

        Ok(ColumnMap {
            features: resolved,
            label,
        })
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    fn cell<'r>(record: &'r StringRecord, column: usize, row: u64, name: &str) -> Result<&'r str> {
        record
            .get(column)
            .ok_or_else(|| ClassifierError::invalid_value(row, name, ""))
    }

    /// Pulls the feature values, in catalogue order, out of one record.
    pub fn parse_record(&self, record: &StringRecord, row: u64) -> Result<FeatureRow> {
        let mut values = Vec::with_capacity(FEATURE_COUNT);
        for (idx, &column) in self.features.iter().enumerate() {
            let name = FEATURE_NAMES[idx];
            let raw = Self::cell(record, column, row, name)?;
            let value = match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => return Err(ClassifierError::invalid_value(row, name, raw)),
            };
            values.push(value);
        }

        let expected = match self.label {
            Some(column) => parse_label(Self::cell(record, column, row, LABEL_COLUMN)?, row),
            None => None,
        };

        Ok(FeatureRow {
            row,
            values,
            expected,
        })
    }
}

/// Reads a ground-truth cell. Blank cells and `-1` mean the window was never
/// labelled; whole-number floats such as `1.0` are accepted. Anything else
/// drops the label but keeps the row.
fn parse_label(raw: &str, row: u64) -> Option<ClassLabel> {
    if raw.is_empty() {
        return None;
    }
    let code = match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => v as i64,
        _ => {
            warn!(row, value = raw, "ignoring unreadable label");
            return None;
        }
    };
    if code == UNLABELLED {
        return None;
    }
    match ClassLabel::try_from(code) {
        Ok(label) => Some(label),
        Err(e) => {
            warn!(row, error = %e, "ignoring label");
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct FeatureFile {
    pub rows: Vec<FeatureRow>,
    pub has_label: bool,
    /// Rows that could not be parsed, with the reason.
    pub rejected: Vec<(u64, ClassifierError)>,
}

pub fn read_features<R: Read>(input: R) -> Result<FeatureFile> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let records: Vec<_> = reader.into_records().collect();
    debug!(records = records.len(), "read feature records");

    let parsed: Vec<(u64, Result<FeatureRow>)> = records
        .into_par_iter()
        .enumerate()
        .map(|(i, record)| {
            let row = i as u64 + 1;
            let parsed = match record {
                Ok(record) => columns.parse_record(&record, row),
                Err(e) => Err(e.into()),
            };
            (row, parsed)
        })
        .collect();

    let mut file = FeatureFile {
        has_label: columns.has_label(),
        ..FeatureFile::default()
    };
    for (row, parsed) in parsed {
        match parsed {
            Ok(features) => file.rows.push(features),
            Err(e) => {
                warn!(row, error = %e, "skipping row");
                file.rejected.push((row, e));
            }
        }
    }
    Ok(file)
}

pub fn read_features_path(path: &Path) -> Result<FeatureFile> {
    read_features(File::open(path)?)
}
