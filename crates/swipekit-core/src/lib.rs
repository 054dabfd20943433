//! Core runtime for swipekit.
//!
//! Everything here runs on one UI thread: a virtual clock, per-frame
//! callbacks, delayed tasks that can be cancelled, and plain observable
//! state cells. Hosts drive the runtime by calling
//! [`RuntimeHandle::advance_frame`] once per display frame.

pub mod collections;
mod frame_clock;
pub mod platform;
mod runtime;
mod state;
mod task;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, RowId, Runtime, RuntimeHandle};
pub use state::{MutableState, State, StateObserver};
pub use task::{TaskHandle, TaskId};

/// Nanoseconds per second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Converts a duration in (fractional) seconds into runtime nanoseconds.
#[inline]
pub fn seconds_to_nanos(seconds: f32) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds as f64 * NANOS_PER_SECOND as f64).round() as u64
}

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{RowId, Runtime, RuntimeHandle};
    pub use crate::state::{MutableState, State, StateObserver};
    pub use crate::task::TaskHandle;
}
