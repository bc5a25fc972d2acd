//! Tremor classification from windowed accelerometer statistics.
//!
//! A raw vector of 32 features (eight statistics over x, y, z acceleration
//! and the signal vector magnitude) is standardized with a fixed scaler and
//! passed through a fitted two-level decision tree.
//!
//! ```
//! use tremor_classifier::{ClassLabel, MotionClassifier, SCALER_MEANS};
//!
//! let classifier = MotionClassifier::default();
//! let label = classifier.predict(&SCALER_MEANS)?;
//! assert_eq!(label, ClassLabel::Tremor);
//! # Ok::<(), tremor_classifier::ClassifierError>(())
//! ```

pub mod batch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod ingest;
pub mod scalers;

pub use classifier::{classify, decision_path, ClassLabel, MotionClassifier};
pub use error::{ClassifierError, Result};
pub use features::{FEATURE_COUNT, FEATURE_NAMES};
pub use scalers::{
    standardize, ScalerParams, StandardScaler, StandardizedVector, SCALER_MEANS, SCALER_SCALES,
};
