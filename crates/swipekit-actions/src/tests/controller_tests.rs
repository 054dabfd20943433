use super::*;
use crate::edge::Edge;
use std::cell::{Cell, RefCell};
use swipekit_core::Runtime;

const PRESS: Point = Point { x: 200.0, y: 20.0 };
const FRAME_NANOS: u64 = 16_000_000;

#[derive(Default)]
struct Pulses(RefCell<Vec<HapticPulse>>);

impl HapticFeedback for Pulses {
    fn pulse(&self, pulse: HapticPulse) {
        self.0.borrow_mut().push(pulse);
    }
}

struct Fixture {
    runtime: Runtime,
    env: RowEnvironment,
    pulses: Rc<Pulses>,
}

impl Fixture {
    fn new() -> Self {
        Self::with_direction(LayoutDirection::LeftToRight)
    }

    fn with_direction(layout_direction: LayoutDirection) -> Self {
        let runtime = Runtime::new();
        let pulses = Rc::new(Pulses::default());
        let env = RowEnvironment {
            runtime: runtime.handle(),
            hub: SwipeHub::new(),
            config: SwipeConfig::default(),
            layout_direction,
            haptics: pulses.clone(),
        };
        Self {
            runtime,
            env,
            pulses,
        }
    }

    fn row(&self, actions: Vec<SwipeAction>, widths: &[f32]) -> RowSwipeController {
        self.row_with(SwipeOptions::default(), actions, widths)
    }

    fn row_with(
        &self,
        options: SwipeOptions,
        actions: Vec<SwipeAction>,
        widths: &[f32],
    ) -> RowSwipeController {
        let row = RowSwipeController::new(&self.env, options, actions);
        row.report_content_size(Size::new(375.0, 44.0));
        for (index, width) in widths.iter().enumerate() {
            row.report_action_size(index, Size::new(*width, 44.0));
        }
        row
    }

    fn pump(&self, seconds: f32) {
        let handle = self.runtime.handle();
        let end = handle.now_nanos() + seconds_to_nanos(seconds);
        while handle.now_nanos() < end {
            handle.advance_frame((handle.now_nanos() + FRAME_NANOS).min(end));
        }
    }

    fn pulses(&self) -> Vec<HapticPulse> {
        self.pulses.0.borrow().clone()
    }
}

fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let bump = Rc::clone(&count);
    (count, move || bump.set(bump.get() + 1))
}

/// Starts a drag in `direction` and returns the touch-down point that
/// later travel is measured from.
fn begin(row: &RowSwipeController, direction: f32) -> Point {
    let at = Point::new(PRESS.x + 26.0 * direction, PRESS.y);
    row.on_drag_changed(DragSample::new(PRESS, at));
    PRESS
}

fn move_to(row: &RowSwipeController, start: Point, dx: f32) -> Point {
    let at = Point::new(start.x + dx, start.y);
    row.on_drag_changed(DragSample::new(PRESS, at));
    at
}

fn release(row: &RowSwipeController, at: Point) {
    row.on_drag_ended(DragSample::new(PRESS, at));
}

fn flag_and_delete(deleted: impl Fn() + 'static) -> Vec<SwipeAction> {
    vec![
        SwipeAction::new("Flag".to_string(), || {}),
        SwipeAction::destructive("Delete".to_string(), deleted),
    ]
}

#[test]
fn short_drag_does_not_start() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    row.on_drag_changed(DragSample::new(PRESS, Point::new(PRESS.x - 20.0, PRESS.y)));

    assert!(!row.gesture_state().is_dragging);
    assert_eq!(row.render_state().content_offset, 0.0);
}

#[test]
fn travel_counts_from_touch_down() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    // A fast flick whose first reported move is already well past the
    // minimum distance.
    let at = Point::new(PRESS.x - 60.0, PRESS.y);
    row.on_drag_changed(DragSample::new(PRESS, at));
    assert!(row.gesture_state().is_dragging);
    assert_eq!(row.gesture_state().drag_offset, -60.0);
    assert_eq!(row.render_state().content_offset, -60.0);

    release(&row, at);
    fixture.pump(2.0);
    assert!(row.is_open());
    assert_eq!(row.render_state().content_offset, -153.0);
}

#[test]
fn drag_just_past_minimum_distance_opens_a_single_action() {
    let fixture = Fixture::new();
    let row = fixture.row(vec![SwipeAction::new("Flag".to_string(), || {})], &[73.0]);

    // Open threshold is 73 / 2 - 32 = 4.5.
    let at = Point::new(PRESS.x - 27.0, PRESS.y);
    row.on_drag_changed(DragSample::new(PRESS, at));
    assert_eq!(row.gesture_state().drag_offset, -27.0);
    release(&row, at);
    fixture.pump(2.0);

    assert!(row.is_open());
    assert_eq!(row.render_state().content_offset, -73.0);
}

#[test]
fn vertical_drag_is_left_to_the_container() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    row.on_drag_changed(DragSample::new(PRESS, Point::new(PRESS.x - 10.0, PRESS.y + 40.0)));
    row.on_drag_changed(DragSample::new(PRESS, Point::new(PRESS.x - 120.0, PRESS.y + 40.0)));

    assert!(!row.gesture_state().is_dragging);
    release(&row, Point::new(PRESS.x - 120.0, PRESS.y + 40.0));
    assert!(!row.is_open());

    // The next gesture is unaffected.
    let start = begin(&row, -1.0);
    move_to(&row, start, -30.0);
    assert!(row.gesture_state().is_dragging);
}

#[test]
fn drag_start_announces_once() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);
    let announcements = Rc::new(Cell::new(0));
    let _subscription = {
        let announcements = Rc::clone(&announcements);
        let id = row.id();
        fixture.env.hub.subscribe(move |signal| {
            if signal.origin == Some(id) {
                announcements.set(announcements.get() + 1);
            }
        })
    };

    let start = begin(&row, -1.0);
    for step in 1..=10 {
        move_to(&row, start, -5.0 * step as f32);
    }

    assert_eq!(announcements.get(), 1);
    assert!(row.gesture_state().is_swiping_in_reveal_direction);
}

#[test]
fn release_past_half_extent_opens_to_exact_extent() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -50.0);
    release(&row, at);
    fixture.pump(2.0);

    let state = row.gesture_state();
    assert_eq!(state.committed_offset, -153.0);
    assert_eq!(row.render_state().content_offset, -153.0);
    assert!(row.is_open());

    let render = row.render_state();
    assert_eq!(render.visual_order.as_slice(), &[1, 0]);
    assert!((render.width_of(0) - 80.0).abs() < 1e-3);
    assert!((render.width_of(1) - 73.0).abs() < 1e-3);
}

#[test]
fn release_short_of_half_extent_closes() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -44.0);
    release(&row, at);
    fixture.pump(2.0);

    assert!(!row.is_open());
    assert_eq!(row.gesture_state().committed_offset, 0.0);
    assert_eq!(row.render_state().content_offset, 0.0);
}

#[test]
fn wrong_direction_drag_is_resisted_and_reveals_nothing() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, 1.0);
    move_to(&row, start, 60.0);

    let render = row.render_state();
    assert!((render.content_offset - 60f32.powf(0.68)).abs() < 1e-3);
    assert!(render.action_widths.iter().all(|width| *width == 0.0));
    assert!(!row.gesture_state().is_swiping_in_reveal_direction);
}

#[test]
fn destructive_full_swipe_arms_with_offset_adjustment() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    move_to(&row, start, -260.0);

    let state = row.gesture_state();
    assert!(state.is_full_swipe_armed);
    assert_eq!(state.pending_offset_adjustment, -88.0);
    assert_eq!(state.drag_offset, -348.0);
    assert_eq!(fixture.pulses(), vec![HapticPulse::Firm]);

    fixture.pump(1.0);
    let render = row.render_state();
    assert!((render.content_offset + 348.0).abs() < 0.05);
    assert_eq!(render.width_of(0), 0.0);
    assert!((render.width_of(1) - 348.0).abs() < 0.05);
}

#[test]
fn crossing_back_disarms_with_light_pulse() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    move_to(&row, start, -260.0);
    // Still past the threshold thanks to the injected adjustment.
    move_to(&row, start, -200.0);
    assert!(row.gesture_state().is_full_swipe_armed);

    move_to(&row, start, -160.0);
    let state = row.gesture_state();
    assert!(!state.is_full_swipe_armed);
    assert_eq!(state.pending_offset_adjustment, 0.0);
    assert_eq!(state.drag_offset, -160.0);
    assert_eq!(fixture.pulses(), vec![HapticPulse::Firm, HapticPulse::Light]);
}

#[test]
fn destructive_commit_collapses_then_invokes_once_and_resets() {
    let fixture = Fixture::new();
    let (deleted, on_delete) = counter();
    let row = fixture.row(flag_and_delete(on_delete), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -260.0);
    release(&row, at);

    let state = row.gesture_state();
    assert!(state.is_committed_deleted);
    assert_eq!(state.drag_offset, -375.0);
    assert!(row.render_state().is_deleted);

    fixture.pump(0.27);
    assert_eq!(deleted.get(), 0);
    assert!(row.render_state().height_fraction < 0.5);
    let render = row.render_state();
    assert_eq!(render.width_of(1), 375.0);
    assert_eq!(render.width_of(0), 0.0);

    fixture.pump(0.03);
    assert_eq!(deleted.get(), 1);
    assert_eq!(row.gesture_state(), RowGestureState::default());
    let render = row.render_state();
    assert_eq!(render.content_offset, 0.0);
    assert_eq!(render.height_fraction, 1.0);
    assert!(!render.is_deleted);

    fixture.pump(1.0);
    assert_eq!(deleted.get(), 1);
}

#[test]
fn row_behaves_fresh_after_destructive_commit() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -260.0);
    release(&row, at);
    fixture.pump(1.0);

    row.report_content_size(Size::new(375.0, 44.0));
    row.report_action_size(0, Size::new(80.0, 44.0));
    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -50.0);
    release(&row, at);
    fixture.pump(2.0);

    assert_eq!(row.gesture_state().committed_offset, -153.0);
}

#[test]
fn non_destructive_full_swipe_invokes_immediately_and_closes() {
    let fixture = Fixture::new();
    let (flagged, on_flag) = counter();
    let row = fixture.row(
        vec![
            SwipeAction::new("Archive".to_string(), || {}),
            SwipeAction::new("Flag".to_string(), on_flag),
        ],
        &[80.0, 80.0],
    );

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -200.0);
    assert!(row.gesture_state().is_full_swipe_armed);
    assert_eq!(row.gesture_state().pending_offset_adjustment, 0.0);
    release(&row, at);

    assert_eq!(flagged.get(), 1);
    fixture.pump(2.0);
    assert_eq!(flagged.get(), 1);
    let render = row.render_state();
    assert_eq!(render.content_offset, 0.0);
    assert_eq!(render.height_fraction, 1.0);
    assert!(!render.is_deleted);
}

#[test]
fn full_swipe_disabled_never_arms() {
    let fixture = Fixture::new();
    let (deleted, on_delete) = counter();
    let row = fixture.row_with(
        SwipeOptions::default().allows_full_swipe(false),
        flag_and_delete(on_delete),
        &[80.0],
    );

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -300.0);
    assert!(!row.gesture_state().is_full_swipe_armed);
    release(&row, at);
    fixture.pump(2.0);

    assert_eq!(deleted.get(), 0);
    assert!(fixture.pulses().is_empty());
    assert_eq!(row.gesture_state().committed_offset, -153.0);
}

#[test]
fn unmount_before_commit_delay_drops_the_callback() {
    let fixture = Fixture::new();
    let (deleted, on_delete) = counter();
    let row = fixture.row(flag_and_delete(on_delete), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -260.0);
    release(&row, at);
    row.unmount();
    fixture.pump(1.0);

    assert_eq!(deleted.get(), 0);
    assert!(!row.is_mounted());
    assert_eq!(fixture.env.hub.subscriber_count(), 0);
}

#[test]
fn tap_action_validates_index_and_mount_state() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    assert_eq!(
        row.tap_action(2),
        Err(SwipeError::ActionIndexOutOfRange { index: 2, len: 2 })
    );

    row.unmount();
    assert_eq!(
        row.tap_action(0),
        Err(SwipeError::RowUnmounted { row: row.id() })
    );
}

#[test]
fn tapping_non_last_action_closes_and_invokes() {
    let fixture = Fixture::new();
    let (flagged, on_flag) = counter();
    let row = fixture.row(
        vec![
            SwipeAction::new("Flag".to_string(), on_flag),
            SwipeAction::destructive("Delete".to_string(), || {}),
        ],
        &[80.0],
    );
    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -120.0);
    release(&row, at);
    fixture.pump(2.0);
    assert!(row.is_open());

    row.tap_action(0).expect("valid index");

    assert_eq!(flagged.get(), 1);
    fixture.pump(2.0);
    assert!(!row.is_open());
    assert_eq!(row.render_state().content_offset, 0.0);
}

#[test]
fn tapping_last_destructive_action_commits() {
    let fixture = Fixture::new();
    let (deleted, on_delete) = counter();
    let row = fixture.row(flag_and_delete(on_delete), &[80.0]);

    row.tap_action(1).expect("valid index");
    assert!(row.gesture_state().is_committed_deleted);
    assert_eq!(deleted.get(), 0);

    fixture.pump(0.3);
    assert_eq!(deleted.get(), 1);
    assert!(!row.gesture_state().is_committed_deleted);
}

#[test]
fn close_signal_mid_drag_ends_the_session() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    move_to(&row, start, -100.0);
    fixture.env.hub.close_all();

    assert!(!row.gesture_state().is_dragging);
    move_to(&row, start, -140.0);
    assert_eq!(row.gesture_state().drag_offset, 0.0);
    release(&row, Point::new(start.x - 140.0, start.y));
    fixture.pump(2.0);
    assert_eq!(row.render_state().content_offset, 0.0);

    let start = begin(&row, -1.0);
    move_to(&row, start, -30.0);
    assert!(row.gesture_state().is_dragging);
}

#[test]
fn cancelled_drag_returns_to_previous_rest() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -120.0);
    release(&row, at);
    fixture.pump(2.0);

    let start = begin(&row, -1.0);
    move_to(&row, start, -200.0);
    row.on_drag_cancelled();
    fixture.pump(2.0);

    assert!(row.is_open());
    assert_eq!(row.render_state().content_offset, -153.0);
}

#[test]
fn actions_set_during_drag_apply_after_release() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -40.0);
    row.set_actions(vec![SwipeAction::new("Pin".to_string(), || {})]);
    assert_eq!(row.action_count(), 2);

    release(&row, at);
    assert_eq!(row.action_count(), 1);
}

#[test]
fn wider_measurement_resettles_open_row() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);
    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -120.0);
    release(&row, at);
    fixture.pump(2.0);

    row.report_action_size(1, Size::new(90.0, 44.0));
    fixture.pump(2.0);

    assert_eq!(row.gesture_state().committed_offset, -170.0);
    assert_eq!(row.render_state().content_offset, -170.0);
}

#[test]
fn on_change_sees_every_frame_and_may_reenter() {
    let fixture = Fixture::new();
    let row = fixture.row(flag_and_delete(|| {}), &[80.0]);
    let offsets = Rc::new(RefCell::new(Vec::new()));
    {
        let offsets = Rc::clone(&offsets);
        let handle = row.clone();
        row.set_on_change(move |state| {
            offsets.borrow_mut().push(state.content_offset);
            // Reading the row from inside the callback is allowed.
            let _ = handle.gesture_state();
        });
    }

    let start = begin(&row, -1.0);
    let at = move_to(&row, start, -120.0);
    release(&row, at);
    fixture.pump(2.0);

    let offsets = offsets.borrow();
    assert!(offsets.len() > 10);
    assert_eq!(offsets.last().copied(), Some(-153.0));
}

#[test]
fn callback_may_unmount_its_own_row() {
    let fixture = Fixture::new();
    let slot: Rc<RefCell<Option<RowSwipeController>>> = Rc::new(RefCell::new(None));
    let on_delete = {
        let slot = Rc::clone(&slot);
        move || {
            if let Some(row) = slot.borrow_mut().take() {
                row.unmount();
            }
        }
    };
    let row = fixture.row(flag_and_delete(on_delete), &[80.0]);
    *slot.borrow_mut() = Some(row.clone());

    row.tap_action(1).expect("valid index");
    fixture.pump(1.0);

    assert!(!row.is_mounted());
    assert!(row.gesture_state().is_committed_deleted);
    assert!(!fixture.runtime.handle().has_pending_work());
}

#[test]
fn leading_rtl_mirrors_trailing_ltr() {
    let ltr = Fixture::new();
    let rtl = Fixture::with_direction(LayoutDirection::RightToLeft);
    let trailing = ltr.row(flag_and_delete(|| {}), &[80.0]);
    let leading = rtl.row_with(
        SwipeOptions::default().edge(Edge::Leading),
        flag_and_delete(|| {}),
        &[80.0],
    );

    let start = begin(&trailing, -1.0);
    move_to(&trailing, start, -90.0);
    let start = begin(&leading, -1.0);
    move_to(&leading, start, -90.0);

    assert_eq!(
        trailing.render_state().content_offset,
        leading.render_state().content_offset
    );
    assert_eq!(
        trailing.render_state().revealed_width(),
        leading.render_state().revealed_width()
    );
}
