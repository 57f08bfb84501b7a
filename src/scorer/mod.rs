pub mod engine;
pub mod rings;
pub mod types;

pub use self::engine::{score_at, score_distance, score_local, Hit, ScoreOutcome};
pub use self::rings::{RingColor, RingScheme};
pub use self::types::{ArrowInput, PlacedArrow, SpotType};
