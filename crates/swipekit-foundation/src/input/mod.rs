pub mod drag;
pub mod types;

pub use drag::{DragDetector, DragGestureHandler, DragSample};
pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::drag::{DragDetector, DragGestureHandler, DragSample};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
