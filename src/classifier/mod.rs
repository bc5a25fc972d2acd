pub mod label;
pub mod tree;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::scalers::StandardScaler;

pub use label::ClassLabel;
pub use tree::{classify, decision_path, Decision, DecisionPath};

/// Scales raw feature vectors and runs them through the decision tree.
#[derive(Default)]
pub struct MotionClassifier {
    scaler: StandardScaler,
}

impl MotionClassifier {
    pub fn new(scaler: StandardScaler) -> Self {
        MotionClassifier { scaler }
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn predict(&self, raw: &[f64]) -> Result<ClassLabel> {
        let standardized = self.scaler.transform(raw)?;
        classify(&standardized)
    }

    pub fn explain(&self, raw: &[f64]) -> Result<DecisionPath> {
        let standardized = self.scaler.transform(raw)?;
        let path = decision_path(&standardized)?;
        debug!(%path, "classified feature vector");
        Ok(path)
    }

    /// Classifies every row in parallel. Results keep the order of `rows`.
    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Vec<Result<ClassLabel>> {
        rows.par_iter().map(|row| self.predict(row)).collect()
    }
}
