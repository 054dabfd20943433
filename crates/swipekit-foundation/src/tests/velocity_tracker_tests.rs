use super::*;

#[test]
fn empty_tracker_reports_zero() {
    let tracker = VelocityTracker::new();
    assert_eq!(tracker.velocity_with_max(8_000.0), Point::ZERO);
}

#[test]
fn steady_leftward_drag_has_negative_x_velocity() {
    let mut tracker = VelocityTracker::new();
    // 10 px every 10 ms to the left = -1000 px/s
    for step in 0..6 {
        tracker.add_position(step * 10, Point::new(300.0 - step as f32 * 10.0, 40.0));
    }

    let velocity = tracker.velocity_with_max(8_000.0);
    assert!(
        (velocity.x + 1000.0).abs() < 150.0,
        "expected ~-1000, got {}",
        velocity.x
    );
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn velocity_is_capped_per_axis() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(1, Point::new(10_000.0, -10_000.0));

    let velocity = tracker.velocity_with_max(8_000.0);
    assert_eq!(velocity, Point::new(8_000.0, -8_000.0));
}

#[test]
fn pause_before_release_means_no_fling() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(ASSUME_STOPPED_MS + 1, Point::new(100.0, 0.0));

    assert_eq!(tracker.velocity_with_max(8_000.0).x, 0.0);
}

#[test]
fn reset_forgets_history() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(10, Point::new(100.0, 0.0));
    tracker.reset();

    assert_eq!(tracker.velocity_with_max(8_000.0), Point::ZERO);
}
