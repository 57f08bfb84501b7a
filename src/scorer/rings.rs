use super::types::{ArrowInput, SpotType};
use crate::geometry::LOGICAL_RADIUS;
use strum_macros::{Display, EnumIter, EnumString};

/// Colour zones of a WA target face.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum RingColor {
    Gold,
    Red,
    Blue,
    Black,
    White,
}

impl RingColor {
    pub fn for_score(score: ArrowInput) -> Self {
        match score.value() {
            9..=10 => Self::Gold,
            7..=8 => Self::Red,
            5..=6 => Self::Blue,
            3..=4 => Self::Black,
            _ => Self::White,
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Self::Gold => "#FFE552",
            Self::Red => "#F65058",
            Self::Blue => "#00B4E4",
            Self::Black => "#1A1A1A",
            Self::White => "#FFFFFF",
        }
    }

    /// Ring divider colour; black zones use white dividers so they stay visible.
    pub fn stroke(&self) -> &'static str {
        match self {
            Self::Black => "#FFFFFF",
            _ => "#1A1A1A",
        }
    }
}

/// Score values ordered from the centre ring outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingScheme {
    rings: Vec<ArrowInput>,
}

impl RingScheme {
    /// Full 11-ring face: X, 10 down to 1.
    pub fn standard() -> Self {
        let mut rings = vec![ArrowInput::X];
        rings.extend((1..=10).rev().map(ArrowInput::Ring));
        Self { rings }
    }

    /// Reduced triple-spot face: X, 10 down to 6.
    pub fn triple() -> Self {
        let mut rings = vec![ArrowInput::X];
        rings.extend((6..=10).rev().map(ArrowInput::Ring));
        Self { rings }
    }

    pub fn for_spot(spot: SpotType) -> Self {
        match spot {
            SpotType::Single => Self::standard(),
            SpotType::Triple => Self::triple(),
        }
    }

    pub fn rings(&self) -> &[ArrowInput] {
        &self.rings
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Every ring is an equal share of the logical radius.
    pub fn ring_width(&self) -> f64 {
        LOGICAL_RADIUS / self.rings.len() as f64
    }

    /// Score for a ring index; anything past the outermost ring is a miss.
    pub fn score_for_ring(&self, index: usize) -> ArrowInput {
        self.rings.get(index).copied().unwrap_or(ArrowInput::Miss)
    }

    pub fn ring_index_of(&self, score: ArrowInput) -> Option<usize> {
        self.rings.iter().position(|&r| r == score)
    }

    /// Inner and outer logical radius of a ring.
    pub fn band(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.rings.len() {
            return None;
        }
        let w = self.ring_width();
        Some((w * index as f64, w * (index + 1) as f64))
    }

    pub fn color(&self, index: usize) -> Option<RingColor> {
        self.rings.get(index).map(|&s| RingColor::for_score(s))
    }
}
