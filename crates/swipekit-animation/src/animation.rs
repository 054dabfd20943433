//! Animatable values driven by the runtime frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use swipekit_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};

use crate::spring::SpringSpec;

/// A single `f32` that can snap or spring towards a target.
///
/// Cloning yields another handle to the same value. Every change is
/// published through [`Animatable::state`], so observers see each frame.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    state: MutableState<f32>,
    runtime: RuntimeHandle,
    current: f32,
    velocity: f32,
    target: f32,
    running: Option<RunningSpring>,
    /// Bumped by every `animate_to`/`snap_to` so stale frames can tell they were superseded.
    generation: u64,
    registration: Option<FrameCallbackRegistration>,
}

#[derive(Clone, Copy)]
struct RunningSpring {
    spec: SpringSpec,
    start_displacement: f32,
    start_velocity: f32,
    start_time_nanos: u64,
}

impl Animatable {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::new(initial),
            runtime,
            current: initial,
            velocity: 0.0,
            target: initial,
            running: None,
            generation: 0,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Spring from the current value to `target`, starting with `initial_velocity`
    /// in units per second.
    pub fn animate_to(&self, target: f32, spec: SpringSpec, initial_velocity: f32) {
        let should_schedule = {
            let mut inner = self.inner.borrow_mut();

            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.generation += 1;
            inner.target = target;

            let displacement = inner.current - target;
            let velocity = if initial_velocity.is_finite() {
                initial_velocity
            } else {
                0.0
            };
            if displacement.abs() < spec.position_threshold && velocity.abs() < spec.velocity_threshold
            {
                inner.running = None;
                inner.velocity = 0.0;
                false
            } else {
                inner.running = Some(RunningSpring {
                    spec,
                    start_displacement: displacement,
                    start_velocity: velocity,
                    start_time_nanos: inner.runtime.now_nanos(),
                });
                inner.velocity = velocity;
                true
            }
        };

        if should_schedule {
            Self::schedule_frame(&self.inner);
        } else {
            self.publish(target);
        }
    }

    /// Retarget while keeping whatever velocity the value currently has.
    pub fn retarget(&self, target: f32, spec: SpringSpec) {
        let velocity = self.velocity();
        self.animate_to(target, spec, velocity);
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&self, target: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.generation += 1;
            inner.running = None;
            inner.velocity = 0.0;
            inner.target = target;
        }
        self.publish(target);
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    /// Return the current animation target.
    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running.is_some()
    }

    /// Get the current state.
    pub fn state(&self) -> State<f32> {
        self.inner.borrow().state.as_state()
    }

    fn publish(&self, value: f32) {
        Self::publish_inner(&self.inner, value);
    }

    fn publish_inner(this: &Rc<RefCell<AnimatableInner>>, value: f32) {
        let state = {
            let mut inner = this.borrow_mut();
            inner.current = value;
            inner.state.clone()
        };
        state.set_value(value);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.frame_clock()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let (value, generation, finished) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let Some(running) = inner.running else {
                return;
            };

            let elapsed_nanos = frame_time_nanos.saturating_sub(running.start_time_nanos);
            let elapsed = elapsed_nanos as f64 / 1_000_000_000.0;
            let motion =
                running
                    .spec
                    .motion_at(running.start_displacement, running.start_velocity, elapsed);

            if elapsed > 0.0 && running.spec.is_settled(motion) {
                log::trace!("spring settled at {} after {elapsed:.3}s", inner.target);
                inner.running = None;
                inner.velocity = 0.0;
                (inner.target, inner.generation, true)
            } else {
                inner.velocity = motion.velocity;
                (inner.target + motion.displacement, inner.generation, false)
            }
        };

        Self::publish_inner(this, value);

        let still_current = this.borrow().generation == generation;
        if !finished && still_current {
            Self::schedule_frame(this);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
