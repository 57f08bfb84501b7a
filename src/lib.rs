pub mod component;
pub mod config;
pub mod end;
pub mod error;
pub mod geometry;
pub mod haptics;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod scorer;
pub mod session;
// cmd and reports are binary modules declared from main.rs.

pub use component::{PlacementOutcome, PreciseScoringInput, TargetFaceScorer};
pub use scorer::{ArrowInput, PlacedArrow, RingScheme, SpotType};
