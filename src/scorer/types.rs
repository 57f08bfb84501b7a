use crate::error::TargetFaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// A scored arrow: a ring value 1..=10, an inner ten, or a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ArrowInput {
    X,
    Ring(u8),
    Miss,
}

impl ArrowInput {
    pub fn ring(value: u8) -> Option<Self> {
        (1..=10).contains(&value).then_some(Self::Ring(value))
    }

    /// Points contributed to an end total. X counts as ten.
    pub fn value(&self) -> u32 {
        match self {
            Self::X => 10,
            Self::Ring(v) => *v as u32,
            Self::Miss => 0,
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss)
    }

    /// X and 10 both count toward the "10s" column on a score sheet.
    pub fn is_ten(&self) -> bool {
        matches!(self, Self::X | Self::Ring(10))
    }
}

impl fmt::Display for ArrowInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Ring(v) => write!(f, "{}", v),
            Self::Miss => write!(f, "M"),
        }
    }
}

impl FromStr for ArrowInput {
    type Err = TargetFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Self::X),
            "M" | "m" => Ok(Self::Miss),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Self::ring)
                .ok_or_else(|| {
                    TargetFaceError::Validation(format!("'{}' is not a valid arrow score", other))
                }),
        }
    }
}

impl TryFrom<String> for ArrowInput {
    type Error = TargetFaceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArrowInput> for String {
    fn from(value: ArrowInput) -> Self {
        value.to_string()
    }
}

/// One accepted scoring event within an end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedArrow {
    pub score: ArrowInput,
    pub x_pct: f64,
    pub y_pct: f64,
    pub face_index: usize,
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    Single,
    Triple,
}

impl SpotType {
    pub fn from_flag(triple_spot: bool) -> Self {
        if triple_spot {
            Self::Triple
        } else {
            Self::Single
        }
    }

    pub fn face_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Triple => 3,
        }
    }
}
