//! Testing utilities and harness for swipekit

pub mod recorders;
pub mod robot;
pub mod robot_assertions;

pub use recorders::{CallCounter, RecordingHaptics};
pub use robot::*;

pub mod prelude {
    pub use crate::recorders::{CallCounter, RecordingHaptics};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
