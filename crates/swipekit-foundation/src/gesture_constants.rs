//! Shared gesture constants for swipeable rows.
//!
//! These values are in logical pixels.

/// Distance the pointer must travel from its press position before a row
/// treats the movement as a swipe.
///
/// Large enough that a vertical scroll with a little horizontal wobble never
/// starts revealing actions.
pub const SWIPE_MIN_DRAG_DISTANCE: f32 = 26.0;

/// Maximum release velocity in logical pixels per second.
///
/// Release velocities feed the open/close spring; capping them keeps a
/// flick from launching the row past its resting offset.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
