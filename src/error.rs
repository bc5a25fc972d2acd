//! Error types for scaling, classification and feature-file ingestion.

use thiserror::Error;

/// Main error type for the tremor classifier.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Feature vector does not have the expected number of values.
    #[error("Shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A required feature index is not present in the vector.
    #[error("Index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A scaler entry has a zero scale.
    #[error("Division by zero: scale at index {index} is zero")]
    DivisionByZero { index: usize },

    /// Class code outside of {0, 1}.
    #[error("Invalid class label: {0}")]
    InvalidLabel(i64),

    /// Feature file header lacks a feature column.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Feature file header names the same column twice.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A cell could not be read as a finite number.
    #[error("Invalid value {value:?} in row {row}, column {column}")]
    InvalidValue {
        row: u64,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    #[must_use]
    pub const fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid value error for a cell of the feature file.
    #[must_use]
    pub fn invalid_value(row: u64, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            row,
            column: column.into(),
            value: value.into(),
        }
    }
}
