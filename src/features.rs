//! Fixed ordering of the 32 accelerometer statistics consumed by the scaler.
//!
//! Features are grouped per signal (x, y, z acceleration and the signal
//! vector magnitude), eight statistics per group, always in the same order.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Number of features in a raw or standardized vector.
pub const FEATURE_COUNT: usize = 32;

const STATISTICS_PER_AXIS: usize = 8;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "mean_accel_x",
    "std_accel_x",
    "var_accel_x",
    "min_accel_x",
    "max_accel_x",
    "ptp_accel_x",
    "energy_accel_x",
    "mav_accel_x",
    "mean_accel_y",
    "std_accel_y",
    "var_accel_y",
    "min_accel_y",
    "max_accel_y",
    "ptp_accel_y",
    "energy_accel_y",
    "mav_accel_y",
    "mean_accel_z",
    "std_accel_z",
    "var_accel_z",
    "min_accel_z",
    "max_accel_z",
    "ptp_accel_z",
    "energy_accel_z",
    "mav_accel_z",
    "mean_svm",
    "std_svm",
    "var_svm",
    "min_svm",
    "max_svm",
    "ptp_svm",
    "energy_svm",
    "mav_svm",
];

static NAME_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect()
});

/// Signal a statistic is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    AccelX,
    AccelY,
    AccelZ,
    /// Signal vector magnitude, `sqrt(x² + y² + z²)`.
    Svm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    Std,
    Var,
    Min,
    Max,
    /// Peak-to-peak, `max - min`.
    Ptp,
    /// Sum of squares.
    Energy,
    /// Mean absolute value.
    Mav,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::AccelX, Axis::AccelY, Axis::AccelZ, Axis::Svm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::AccelX => "accel_x",
            Axis::AccelY => "accel_y",
            Axis::AccelZ => "accel_z",
            Axis::Svm => "svm",
        }
    }

    const fn offset(self) -> usize {
        match self {
            Axis::AccelX => 0,
            Axis::AccelY => 1,
            Axis::AccelZ => 2,
            Axis::Svm => 3,
        }
    }
}

impl Statistic {
    pub const ALL: [Statistic; STATISTICS_PER_AXIS] = [
        Statistic::Mean,
        Statistic::Std,
        Statistic::Var,
        Statistic::Min,
        Statistic::Max,
        Statistic::Ptp,
        Statistic::Energy,
        Statistic::Mav,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Var => "var",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Ptp => "ptp",
            Statistic::Energy => "energy",
            Statistic::Mav => "mav",
        }
    }

    const fn offset(self) -> usize {
        match self {
            Statistic::Mean => 0,
            Statistic::Std => 1,
            Statistic::Var => 2,
            Statistic::Min => 3,
            Statistic::Max => 4,
            Statistic::Ptp => 5,
            Statistic::Energy => 6,
            Statistic::Mav => 7,
        }
    }
}

/// Position of `stat` over `axis` in a feature vector.
pub const fn feature_index(stat: Statistic, axis: Axis) -> usize {
    axis.offset() * STATISTICS_PER_AXIS + stat.offset()
}

pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_NAMES.get(index).copied()
}

/// Looks up a feature position by its column name, e.g. `"mav_accel_y"`.
pub fn index_of(name: &str) -> Option<usize> {
    NAME_INDEX.get(name).copied()
}
