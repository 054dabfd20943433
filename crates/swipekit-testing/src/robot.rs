//! Robot-style harness for swipe interactions.
//!
//! A [`SwipeRobot`] owns a runtime with virtual time, a container wired to
//! recording haptics, and helpers that drive rows through real pointer
//! streams, so tests exercise the same path a host would.
//!
//! # Example
//!
//! ```
//! use swipekit_actions::SwipeAction;
//! use swipekit_testing::SwipeRobot;
//!
//! let robot = SwipeRobot::new();
//! let mut row = robot.attach(vec![SwipeAction::new("Flag".to_string(), || {})]);
//! robot.measure(&row, 375.0, &[80.0]);
//!
//! robot.swipe(&mut row, -120.0);
//! robot.settle();
//! assert!(row.controller().is_open());
//! ```

use std::rc::Rc;

use swipekit_actions::{
    wrap_with_swipe_container, SwipeAction, SwipeConfig, SwipeContainer, SwipeOptions, SwipeRow,
};
use swipekit_core::{seconds_to_nanos, Runtime, RuntimeHandle};
use swipekit_foundation::{
    LayoutDirection, MeasurementSink, PointerEvent, PointerEventKind,
};
use swipekit_ui_graphics::{Point, Size};

use crate::recorders::RecordingHaptics;

/// Virtual frame interval, roughly 60 Hz.
pub const FRAME_NANOS: u64 = 16_000_000;

/// Height every measured row reports.
pub const ROW_HEIGHT: f32 = 44.0;

/// Where scripted drags put the pointer down.
pub const PRESS_POINT: Point = Point { x: 187.5, y: 22.0 };

/// Upper bound on frames pumped by [`SwipeRobot::settle`].
const MAX_SETTLE_FRAMES: usize = 1_000;

/// Steps used by [`SwipeRobot::swipe`].
const SWIPE_STEPS: usize = 8;

pub struct SwipeRobot {
    runtime: Runtime,
    container: SwipeContainer<()>,
    haptics: Rc<RecordingHaptics>,
}

impl Default for SwipeRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeRobot {
    pub fn new() -> Self {
        Self::with_setup(SwipeConfig::default(), LayoutDirection::LeftToRight)
    }

    pub fn with_layout_direction(layout_direction: LayoutDirection) -> Self {
        Self::with_setup(SwipeConfig::default(), layout_direction)
    }

    pub fn with_setup(config: SwipeConfig, layout_direction: LayoutDirection) -> Self {
        let runtime = Runtime::new();
        let haptics = RecordingHaptics::new();
        let container = wrap_with_swipe_container((), runtime.handle())
            .with_config(config)
            .with_layout_direction(layout_direction)
            .with_haptics(haptics.clone());
        Self {
            runtime,
            container,
            haptics,
        }
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn container(&self) -> &SwipeContainer<()> {
        &self.container
    }

    pub fn haptics(&self) -> &RecordingHaptics {
        &self.haptics
    }

    /// Trailing row with full swipe enabled.
    pub fn attach(&self, actions: Vec<SwipeAction<String>>) -> SwipeRow<(), String> {
        self.container.attach_swipe_actions((), actions)
    }

    pub fn attach_with(
        &self,
        options: SwipeOptions,
        actions: Vec<SwipeAction<String>>,
    ) -> SwipeRow<(), String> {
        self.container.attach_swipe_actions_with((), options, actions)
    }

    /// Reports layout sizes the way a rendering layer would.
    pub fn measure<R, L>(&self, row: &SwipeRow<R, L>, content_width: f32, action_widths: &[f32]) {
        let controller = row.controller();
        controller.report_content_size(Size::new(content_width, ROW_HEIGHT));
        for (index, width) in action_widths.iter().enumerate() {
            controller.report_action_size(index, Size::new(*width, ROW_HEIGHT));
        }
    }

    pub fn now_millis(&self) -> i64 {
        (self.runtime.handle().now_nanos() / 1_000_000) as i64
    }

    pub fn advance_frame(&self) {
        let handle = self.runtime.handle();
        handle.advance_frame(handle.now_nanos() + FRAME_NANOS);
    }

    /// Pumps frames until `seconds` of virtual time have passed.
    pub fn advance_time(&self, seconds: f32) {
        let handle = self.runtime.handle();
        let end = handle.now_nanos() + seconds_to_nanos(seconds);
        while handle.now_nanos() < end {
            handle.advance_frame((handle.now_nanos() + FRAME_NANOS).min(end));
        }
    }

    /// Pumps frames until no animation or deferred task is left.
    pub fn settle(&self) {
        let handle = self.runtime.handle();
        for _ in 0..MAX_SETTLE_FRAMES {
            if !handle.has_pending_work() {
                return;
            }
            self.advance_frame();
        }
    }

    pub fn press<R, L>(&self, row: &mut SwipeRow<R, L>, at: Point) -> bool {
        row.on_pointer_event(&self.event(PointerEventKind::Down, at))
    }

    /// Advances one frame, then moves the pointer to `to`.
    pub fn move_to<R, L>(&self, row: &mut SwipeRow<R, L>, to: Point) -> bool {
        self.advance_frame();
        row.on_pointer_event(&self.event(PointerEventKind::Move, to))
    }

    pub fn release<R, L>(&self, row: &mut SwipeRow<R, L>, at: Point) -> bool {
        row.on_pointer_event(&self.event(PointerEventKind::Up, at))
    }

    pub fn cancel<R, L>(&self, row: &mut SwipeRow<R, L>, at: Point) -> bool {
        row.on_pointer_event(&self.event(PointerEventKind::Cancel, at))
    }

    /// Presses and drags horizontally without releasing.
    ///
    /// The pointer first travels exactly the minimum drag distance, which
    /// starts the drag, then moves on in `steps` moves until it is `dx` from
    /// the press point. Returns where the pointer is.
    pub fn drag_by<R, L>(&self, row: &mut SwipeRow<R, L>, dx: f32, steps: usize) -> Point {
        let direction = if dx < 0.0 { -1.0 } else { 1.0 };
        let slop = self.container.config().min_drag_distance * direction;
        self.press(row, PRESS_POINT);

        let started = Point::new(PRESS_POINT.x + slop, PRESS_POINT.y);
        self.move_to(row, started);
        self.drag_from(row, started, dx - slop, steps)
    }

    /// Continues a drag already in progress from `from` by `dx`.
    pub fn drag_from<R, L>(&self, row: &mut SwipeRow<R, L>, from: Point, dx: f32, steps: usize) -> Point {
        let steps = steps.max(1);
        let mut at = from;
        for step in 1..=steps {
            at = Point::new(from.x + dx * step as f32 / steps as f32, from.y);
            self.move_to(row, at);
        }
        at
    }

    /// Drags by `dx` and releases straight away.
    pub fn swipe<R, L>(&self, row: &mut SwipeRow<R, L>, dx: f32) {
        let at = self.drag_by(row, dx, SWIPE_STEPS);
        self.release(row, at);
    }

    /// Drags by `dx`, holds still long enough to lose all velocity, then
    /// releases.
    pub fn swipe_and_hold<R, L>(&self, row: &mut SwipeRow<R, L>, dx: f32) {
        let at = self.drag_by(row, dx, SWIPE_STEPS);
        self.advance_time(0.1);
        self.release(row, at);
    }

    fn event(&self, kind: PointerEventKind, at: Point) -> PointerEvent {
        PointerEvent::new(kind, at, self.now_millis())
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
