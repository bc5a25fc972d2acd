use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Output class of the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ClassLabel {
    NoTremor,
    Tremor,
}

impl ClassLabel {
    pub const fn code(self) -> u8 {
        match self {
            ClassLabel::NoTremor => 0,
            ClassLabel::Tremor => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::NoTremor => "no_tremor",
            ClassLabel::Tremor => "tremor",
        }
    }

    pub fn is_tremor(self) -> bool {
        self == ClassLabel::Tremor
    }
}

impl From<ClassLabel> for u8 {
    fn from(label: ClassLabel) -> u8 {
        label.code()
    }
}

impl TryFrom<i64> for ClassLabel {
    type Error = ClassifierError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ClassLabel::NoTremor),
            1 => Ok(ClassLabel::Tremor),
            other => Err(ClassifierError::InvalidLabel(other)),
        }
    }
}

impl TryFrom<u8> for ClassLabel {
    type Error = ClassifierError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ClassLabel::try_from(i64::from(code))
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
