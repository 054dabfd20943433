//! Foundation pieces shared by swipeable rows: raw pointer input, the drag
//! detector that turns it into drag samples, and the host capabilities a row
//! depends on (haptics, layout direction, measurement feedback).

pub mod gesture_constants;
pub mod haptics;
pub mod input;
pub mod layout_direction;
pub mod measurement;
pub mod velocity_tracker;

pub use gesture_constants::*;
pub use haptics::{HapticFeedback, HapticPulse, NoHaptics};
pub use input::{
    DragDetector, DragGestureHandler, DragSample, PointerEvent, PointerEventKind, PointerId,
};
pub use layout_direction::LayoutDirection;
pub use measurement::MeasurementSink;
pub use velocity_tracker::VelocityTracker;

pub use swipekit_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::haptics::{HapticFeedback, HapticPulse};
    pub use crate::input::prelude::*;
    pub use crate::layout_direction::LayoutDirection;
    pub use crate::measurement::MeasurementSink;
}
