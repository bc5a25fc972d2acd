//! The fitted two-level decision tree.
//!
//! ```text
//! mav_accel_y <= -0.71
//! ├── mean_accel_y <= -0.05  -> 0
//! └── mean_accel_y >  -0.05  -> 1
//! mav_accel_y >  -0.71       -> 1
//! ```
//!
//! Thresholds apply to standardized features, not raw ones.

use std::fmt;

use crate::classifier::label::ClassLabel;
use crate::error::{ClassifierError, Result};
use crate::features::{feature_index, feature_name, Axis, Statistic};

pub const MAV_ACCEL_Y: usize = feature_index(Statistic::Mav, Axis::AccelY);
pub const MEAN_ACCEL_Y: usize = feature_index(Statistic::Mean, Axis::AccelY);

pub const ROOT_THRESHOLD: f64 = -0.71;
pub const INNER_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Branch {
    /// Continue at this position in [`TREE`].
    Node(usize),
    Leaf(ClassLabel),
}

/// `standardized[feature] <= threshold` chooses `at_or_below`, otherwise `above`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionNode {
    pub feature: usize,
    pub threshold: f64,
    pub at_or_below: Branch,
    pub above: Branch,
}

/// Root first.
pub const TREE: [DecisionNode; 2] = [
    DecisionNode {
        feature: MAV_ACCEL_Y,
        threshold: ROOT_THRESHOLD,
        at_or_below: Branch::Node(1),
        above: Branch::Leaf(ClassLabel::Tremor),
    },
    DecisionNode {
        feature: MEAN_ACCEL_Y,
        threshold: INNER_THRESHOLD,
        at_or_below: Branch::Leaf(ClassLabel::NoTremor),
        above: Branch::Leaf(ClassLabel::Tremor),
    },
];

/// One evaluated node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub feature: usize,
    pub value: f64,
    pub threshold: f64,
    pub at_or_below: bool,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.at_or_below { "<=" } else { ">" };
        write!(
            f,
            "{} = {:.4} {} {}",
            feature_name(self.feature).unwrap_or("?"),
            self.value,
            op,
            self.threshold
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionPath {
    pub decisions: Vec<Decision>,
    pub label: ClassLabel,
}

impl fmt::Display for DecisionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decision in &self.decisions {
            write!(f, "{decision} -> ")?;
        }
        write!(f, "class {}", self.label)
    }
}

fn walk(standardized: &[f64], mut on_decision: impl FnMut(Decision)) -> Result<ClassLabel> {
    let mut position = 0;
    // every step moves strictly deeper, so the walk ends within TREE.len() steps
    for _ in 0..TREE.len() {
        let node = TREE
            .get(position)
            .ok_or_else(|| ClassifierError::index_out_of_range(position, TREE.len()))?;
        let value = *standardized
            .get(node.feature)
            .ok_or_else(|| ClassifierError::index_out_of_range(node.feature, standardized.len()))?;

        let at_or_below = value <= node.threshold;
        on_decision(Decision {
            feature: node.feature,
            value,
            threshold: node.threshold,
            at_or_below,
        });

        match if at_or_below { node.at_or_below } else { node.above } {
            Branch::Leaf(label) => return Ok(label),
            Branch::Node(next) => position = next,
        }
    }
    Err(ClassifierError::index_out_of_range(position, TREE.len()))
}

/// Runs the tree over a standardized feature vector.
///
/// Fails with [`ClassifierError::IndexOutOfRange`] when the vector is too
/// short to hold a feature the path needs.
pub fn classify(standardized: &[f64]) -> Result<ClassLabel> {
    walk(standardized, |_| {})
}

/// Like [`classify`], also returning every decision taken on the way.
pub fn decision_path(standardized: &[f64]) -> Result<DecisionPath> {
    let mut decisions = Vec::with_capacity(TREE.len());
    let label = walk(standardized, |d| decisions.push(d))?;
    Ok(DecisionPath { decisions, label })
}
