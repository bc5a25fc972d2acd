//! Classifying a whole feature file and reporting on the result.

use std::io::Write;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::classifier::{ClassLabel, MotionClassifier};
use crate::error::Result;
use crate::ingest::FeatureRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub row: u64,
    pub class: ClassLabel,
    pub tremor: bool,
    /// Empty in the output when the input had no label column.
    pub expected: Option<ClassLabel>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub classified: usize,
    pub failed: usize,
    pub no_tremor: usize,
    pub tremor: usize,
    pub labelled: usize,
    pub correct: usize,
}

impl Summary {
    /// Share of labelled rows the tree got right, if any row had a label.
    pub fn accuracy(&self) -> Option<f64> {
        if self.labelled == 0 {
            None
        } else {
            Some(self.correct as f64 / self.labelled as f64)
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub predictions: Vec<Prediction>,
    pub summary: Summary,
}

/// Classifies `rows` in parallel; predictions come back in row order.
///
/// With `explain` set, every row's decision path is logged at info level.
pub fn classify_rows(
    classifier: &MotionClassifier,
    rows: &[FeatureRow],
    explain: bool,
) -> BatchOutcome {
    let predictions: Vec<Option<Prediction>> = rows
        .par_iter()
        .map(|r| {
            let class = if explain {
                classifier.explain(&r.values).map(|path| {
                    info!(row = r.row, %path, "decision path");
                    path.label
                })
            } else {
                classifier.predict(&r.values)
            };
            match class {
                Ok(class) => Some(Prediction {
                    row: r.row,
                    class,
                    tremor: class.is_tremor(),
                    expected: r.expected,
                }),
                Err(e) => {
                    warn!(row = r.row, error = %e, "classification failed");
                    None
                }
            }
        })
        .collect();

    let failed = predictions.iter().filter(|p| p.is_none()).count();
    let predictions: Vec<Prediction> = predictions.into_iter().flatten().collect();

    let count = |label: ClassLabel| predictions.iter().filter(|p| p.class == label).count();
    let labelled = predictions.iter().filter(|p| p.expected.is_some()).count();
    let correct = predictions
        .iter()
        .filter(|p| p.expected == Some(p.class))
        .count();

    BatchOutcome {
        summary: Summary {
            classified: predictions.len(),
            failed,
            no_tremor: count(ClassLabel::NoTremor),
            tremor: count(ClassLabel::Tremor),
            labelled,
            correct,
        },
        predictions,
    }
}

pub fn write_predictions<W: Write>(output: W, predictions: &[Prediction]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for prediction in predictions {
        writer.serialize(prediction)?;
    }
    writer.flush()?;
    Ok(())
}
