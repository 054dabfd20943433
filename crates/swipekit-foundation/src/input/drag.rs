//! Drag samples and the detector that produces them from raw pointer input.

use super::types::{PointerEvent, PointerEventKind, PointerId};
use crate::gesture_constants::{MAX_FLING_VELOCITY, SWIPE_MIN_DRAG_DISTANCE};
use crate::velocity_tracker::VelocityTracker;
use swipekit_ui_graphics::Point;

/// One sample of an in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragSample {
    /// Where the pointer went down.
    pub start_location: Point,
    /// Where the pointer is now.
    pub location: Point,
    /// Pointer velocity in units per second; zero until release.
    pub velocity: Point,
}

impl DragSample {
    pub fn new(start_location: Point, location: Point) -> Self {
        Self {
            start_location,
            location,
            velocity: Point::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    /// Movement since the pointer went down.
    pub fn translation(&self) -> Point {
        self.location - self.start_location
    }
}

/// Receiver of recognised drags.
pub trait DragGestureHandler {
    fn on_drag_changed(&self, sample: DragSample);

    fn on_drag_ended(&self, sample: DragSample);

    /// The pointer stream was cancelled by the host; no release happened.
    fn on_drag_cancelled(&self);
}

struct ActiveDrag {
    pointer: PointerId,
    start: Point,
    last: Point,
    moved: bool,
}

/// Converts a single-pointer event stream into [`DragSample`]s.
///
/// Every move is forwarded; the handler applies its own minimum distance.
/// Moves past [`SWIPE_MIN_DRAG_DISTANCE`] are consumed so the host will not
/// also treat the gesture as a tap. Additional pointers are ignored.
pub struct DragDetector {
    active: Option<ActiveDrag>,
    tracker: VelocityTracker,
    max_velocity: f32,
}

impl Default for DragDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DragDetector {
    pub fn new() -> Self {
        Self {
            active: None,
            tracker: VelocityTracker::new(),
            max_velocity: MAX_FLING_VELOCITY,
        }
    }

    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Feeds one pointer event. Returns `true` when the event belonged to
    /// the tracked pointer.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        handler: &dyn DragGestureHandler,
    ) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() || self.active.is_some() {
                    return false;
                }
                self.tracker.reset();
                self.tracker.add_position(event.uptime_millis, event.position);
                self.active = Some(ActiveDrag {
                    pointer: event.id,
                    start: event.position,
                    last: event.position,
                    moved: false,
                });
                // Do NOT consume Down, the host may still turn it into a tap.
                true
            }
            PointerEventKind::Move => {
                let Some(active) = self.active.as_mut().filter(|a| a.pointer == event.id) else {
                    return false;
                };
                if event.is_consumed() {
                    return false;
                }
                self.tracker.add_position(event.uptime_millis, event.position);
                active.last = event.position;
                active.moved = true;
                let sample = DragSample::new(active.start, event.position);
                if active.start.distance_to(event.position) >= SWIPE_MIN_DRAG_DISTANCE {
                    event.consume();
                }
                handler.on_drag_changed(sample);
                true
            }
            PointerEventKind::Up => {
                let Some(active) = self.take_if_owner(event.id) else {
                    return false;
                };
                self.tracker.add_position(event.uptime_millis, event.position);
                if active.moved || active.last != event.position {
                    let velocity = self.tracker.velocity_with_max(self.max_velocity);
                    let sample =
                        DragSample::new(active.start, event.position).with_velocity(velocity);
                    handler.on_drag_ended(sample);
                }
                self.tracker.reset();
                true
            }
            PointerEventKind::Cancel => {
                let Some(active) = self.take_if_owner(event.id) else {
                    return false;
                };
                if active.moved {
                    log::trace!("drag cancelled for pointer {}", active.pointer);
                    handler.on_drag_cancelled();
                }
                self.tracker.reset();
                true
            }
        }
    }

    fn take_if_owner(&mut self, pointer: PointerId) -> Option<ActiveDrag> {
        if self.active.as_ref().is_some_and(|active| active.pointer == pointer) {
            self.active.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/drag_detector_tests.rs"]
mod tests;
