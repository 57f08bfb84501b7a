pub mod animation;
pub mod navigator;
pub mod scheduler;

pub use self::animation::{ease_out_cubic, ScrollAnimation};
pub use self::navigator::{FaceNavigator, NavPhase};
pub use self::scheduler::{Scheduler, TaskHandle};
