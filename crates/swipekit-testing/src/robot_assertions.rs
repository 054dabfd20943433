//! Assertion utilities for robot tests.

use swipekit_actions::RowRenderState;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the row rests closed with nothing revealed.
pub fn assert_closed(state: &RowRenderState, msg: &str) {
    assert_approx_eq(state.content_offset, 0.0, 0.01, &format!("{} - offset", msg));
    assert!(
        state.action_widths.iter().all(|width| width.abs() <= 0.01),
        "{}: expected no revealed actions, got {:?}",
        msg,
        state.action_widths
    );
}

/// Assert that no action width is negative.
pub fn assert_widths_non_negative(state: &RowRenderState, msg: &str) {
    assert!(
        state.action_widths.iter().all(|width| *width >= 0.0),
        "{}: negative action width in {:?}",
        msg,
        state.action_widths
    );
}
