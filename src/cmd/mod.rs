pub mod render;
pub mod score;
pub mod simulate;
