use swipekit_core::collections::map::HashMap;
use swipekit_core::collections::new_map;
use swipekit_ui_graphics::{Point, Size};

/// Gesture state of one row, owned by its controller.
///
/// Offsets are physical: positive moves the content right. Once
/// `is_committed_deleted` is set the row is pinned off-screen and the other
/// flags are not consulted until [`RowGestureState::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowGestureState {
    pub drag_offset: f32,
    /// Offset the row rests at after a drag left it open.
    pub committed_offset: f32,
    /// Offset injected while a destructive full swipe is armed.
    pub pending_offset_adjustment: f32,
    pub start_location: Option<Point>,
    pub is_dragging: bool,
    pub is_swiping_in_reveal_direction: bool,
    pub is_full_swipe_armed: bool,
    pub is_committed_deleted: bool,
    pub measured_content_size: Option<Size>,
    /// Last reported size per action index.
    pub measured_action_sizes: HashMap<usize, Size>,
}

impl Default for RowGestureState {
    fn default() -> Self {
        Self {
            drag_offset: 0.0,
            committed_offset: 0.0,
            pending_offset_adjustment: 0.0,
            start_location: None,
            is_dragging: false,
            is_swiping_in_reveal_direction: false,
            is_full_swipe_armed: false,
            is_committed_deleted: false,
            measured_content_size: None,
            measured_action_sizes: new_map(),
        }
    }
}

impl RowGestureState {
    /// Width of the row content, zero until it has been measured.
    pub fn content_width(&self) -> f32 {
        self.measured_content_size
            .map(|size| size.sanitized_width())
            .unwrap_or(0.0)
    }

    /// Clears the per-gesture fields and keeps the measurements.
    pub(crate) fn end_gesture(&mut self) {
        self.start_location = None;
        self.is_dragging = false;
        self.is_swiping_in_reveal_direction = false;
        self.is_full_swipe_armed = false;
        self.pending_offset_adjustment = 0.0;
    }

    /// Back to a freshly mounted row, measurements included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
