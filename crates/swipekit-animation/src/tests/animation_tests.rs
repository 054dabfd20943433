use super::*;

use crate::SpringMotion;
use swipekit_core::Runtime;
use std::cell::RefCell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn pump(runtime: &RuntimeHandle, frames: usize) {
    for _ in 0..frames {
        let next = runtime.now_nanos() + FRAME_NANOS;
        runtime.advance_frame(next);
    }
}

#[test]
fn spring_reports_intermediate_values_and_lands_on_target() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());
    let samples = Rc::new(RefCell::new(Vec::new()));
    let _observer = {
        let samples = Rc::clone(&samples);
        animatable
            .state()
            .subscribe(move |value| samples.borrow_mut().push(*value))
    };

    animatable.animate_to(-219.0, SpringSpec::with_duration(0.68, 0.0), 0.0);
    assert!(animatable.is_running());
    pump(&handle, 240);

    let samples = samples.borrow();
    assert!(samples.iter().any(|value| *value < -1.0 && *value > -218.0));
    assert_eq!(animatable.value(), -219.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_pending_work());
}

#[test]
fn snap_cancels_running_animation() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(100.0, SpringSpec::with_duration(0.68, 0.0), 0.0);
    pump(&handle, 3);
    animatable.snap_to(40.0);
    pump(&handle, 10);

    assert_eq!(animatable.value(), 40.0);
    assert_eq!(animatable.target(), 40.0);
    assert!(!animatable.is_running());
}

#[test]
fn retarget_supersedes_previous_target() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(100.0, SpringSpec::with_duration(0.68, 0.0), 0.0);
    pump(&handle, 5);
    assert!(animatable.velocity() > 0.0);
    animatable.retarget(0.0, SpringSpec::with_duration(0.31, 0.0));
    pump(&handle, 120);

    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn animating_to_current_value_is_a_no_op() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(0.0, SpringSpec::default(), 0.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_pending_work());
}

#[test]
fn with_duration_maps_bounce_to_damping() {
    assert_eq!(SpringSpec::with_duration(0.5, 0.0).damping_ratio, 1.0);
    assert!(SpringSpec::with_duration(0.5, 0.3).damping_ratio < 1.0);
    assert!(SpringSpec::with_duration(0.5, -0.3).damping_ratio > 1.0);
    assert!(
        SpringSpec::with_duration(0.28, 0.0).stiffness
            > SpringSpec::with_duration(0.68, 0.0).stiffness
    );
}

#[test]
fn every_damping_regime_decays_towards_rest() {
    for bounce in [-0.5f32, 0.0, 0.4] {
        let spec = SpringSpec::with_duration(0.5, bounce);
        let start = spec.motion_at(50.0, 0.0, 0.0);
        assert!((start.displacement - 50.0).abs() < 1e-3);
        let late: SpringMotion = spec.motion_at(50.0, 0.0, 5.0);
        assert!(spec.is_settled(late), "bounce {bounce} did not settle");
    }
}
