//! Row swipe controller: the per-row gesture and animation state machine.
//!
//! A row moves through `idle -> dragging -> [full swipe armed] ->
//! {open | idle | deleted}`. Drag samples, taps, measurements and close
//! signals all funnel into methods that mutate [`RowGestureState`] under a
//! single borrow and return the side effects to run afterwards: hub
//! announcements, haptic pulses, animation targets, deferred commits and
//! action callbacks. Those run with no borrow held, so observers and
//! callbacks are free to call back into the row (or drop it).

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use swipekit_animation::{Animatable, SpringSpec};
use swipekit_core::{seconds_to_nanos, RowId, RuntimeHandle, StateObserver, TaskHandle};
use swipekit_foundation::{
    DragGestureHandler, DragSample, HapticFeedback, HapticPulse, LayoutDirection, MeasurementSink,
};
use swipekit_ui_graphics::{Point, Size};

use crate::action::SwipeAction;
use crate::config::{SwipeConfig, SwipeOptions};
use crate::error::SwipeError;
use crate::hub::{CloseSignal, HubSubscription, SwipeHub};
use crate::render::RowRenderState;
use crate::shaping::{action_widths, RevealGeometry, WidthPhase};
use crate::state::RowGestureState;

/// What a row receives from the container it is attached under.
#[derive(Clone)]
pub struct RowEnvironment {
    pub runtime: RuntimeHandle,
    pub hub: SwipeHub,
    pub config: SwipeConfig,
    pub layout_direction: LayoutDirection,
    pub haptics: Rc<dyn HapticFeedback>,
}

type ChangeCallback = Rc<dyn Fn(&RowRenderState)>;

#[derive(Clone, Copy)]
struct ArmTransition {
    until_nanos: u64,
    spec: SpringSpec,
}

struct RowInner<L> {
    id: RowId,
    runtime: RuntimeHandle,
    hub: SwipeHub,
    config: SwipeConfig,
    layout_direction: LayoutDirection,
    haptics: Rc<dyn HapticFeedback>,
    options: SwipeOptions,
    actions: Vec<SwipeAction<L>>,
    /// Actions supplied mid-drag, applied once the gesture ends.
    queued_actions: Option<Vec<SwipeAction<L>>>,
    state: RowGestureState,
    /// Physical content offset.
    offset: Animatable,
    height: Animatable,
    /// Offset changes spring instead of snapping while this is live.
    arm_transition: Option<ArmTransition>,
    /// Remaining samples of the current pointer stream are ignored.
    gesture_superseded: bool,
    /// Bumped whenever pending deferred work must be considered stale.
    generation: u64,
    mounted: bool,
    commit_task: Option<TaskHandle>,
    subscription: Option<HubSubscription>,
    animation_observers: Vec<StateObserver>,
    on_change: Option<ChangeCallback>,
}

enum Motion {
    Snap(f32),
    Spring {
        target: f32,
        spec: SpringSpec,
        velocity: f32,
    },
    /// Spring to `target` keeping the current velocity.
    Retarget { target: f32, spec: SpringSpec },
}

impl Motion {
    fn run(self, animatable: &Animatable) {
        match self {
            Motion::Snap(target) => animatable.snap_to(target),
            Motion::Spring {
                target,
                spec,
                velocity,
            } => animatable.animate_to(target, spec, velocity),
            Motion::Retarget { target, spec } => animatable.retarget(target, spec),
        }
    }
}

struct PendingCommit {
    delay_nanos: u64,
    generation: u64,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct Effects {
    announce: Option<RowId>,
    prepare_haptics: bool,
    pulse: Option<HapticPulse>,
    offset: Option<Motion>,
    height: Option<Motion>,
    commit: Option<PendingCommit>,
    invoke: Option<Rc<dyn Fn()>>,
    notify: bool,
}

/// Handle to one row's swipe state machine.
///
/// Clones share the same row. The row stays subscribed to its hub until
/// [`RowSwipeController::unmount`] is called.
pub struct RowSwipeController<L: 'static = String> {
    inner: Rc<RefCell<RowInner<L>>>,
}

impl<L: 'static> Clone for RowSwipeController<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: 'static> RowInner<L> {
    fn sign(&self) -> f32 {
        self.options.edge.reveal_sign(self.layout_direction)
    }

    fn geometry(&self) -> RevealGeometry {
        let last_is_destructive = self
            .actions
            .last()
            .is_some_and(SwipeAction::is_destructive);
        RevealGeometry::compute(
            &self.config,
            self.actions.len(),
            last_is_destructive,
            self.options.allows_full_swipe,
            self.state.content_width(),
            &self.state.measured_action_sizes,
        )
    }

    fn is_open(&self) -> bool {
        !self.state.is_committed_deleted && self.sign() * self.state.committed_offset > 0.0
    }

    fn render_state(&self) -> RowRenderState {
        let sign = self.sign();
        let content_offset = self.offset.value();
        let phase = if self.state.is_committed_deleted {
            WidthPhase::Deleted
        } else if self.state.is_full_swipe_armed {
            WidthPhase::FullSwipeArmed
        } else {
            WidthPhase::Revealing
        };
        let widths = action_widths(
            &self.config,
            &self.geometry(),
            self.actions.len(),
            &self.state.measured_action_sizes,
            sign * content_offset,
            self.state.content_width(),
            phase,
        );
        let visual_order: SmallVec<[usize; 4]> = self
            .options
            .edge
            .visual_order(self.actions.len())
            .into_iter()
            .collect();
        let action_widths = visual_order.iter().map(|index| widths[*index]).collect();

        RowRenderState {
            content_offset,
            visual_order,
            action_widths,
            height_fraction: self.height.value().max(0.0),
            is_full_swipe_armed: self.state.is_full_swipe_armed,
            is_deleted: self.state.is_committed_deleted,
            is_dragging: self.state.is_dragging,
        }
    }

    fn take_queued_actions(&mut self) {
        if let Some(actions) = self.queued_actions.take() {
            self.install_actions(actions);
        }
    }

    fn install_actions(&mut self, actions: Vec<SwipeAction<L>>) {
        let count = actions.len();
        self.actions = actions;
        self.state
            .measured_action_sizes
            .retain(|index, _| *index < count);
    }

    /// Moves an idle open row onto the current reveal extent.
    fn resettle(&mut self, effects: &mut Effects) {
        if self.state.is_dragging || !self.is_open() {
            return;
        }
        let target = self.sign() * self.geometry().reveal_extent;
        if target == self.state.committed_offset {
            return;
        }
        self.state.committed_offset = target;
        self.state.drag_offset = target;
        effects.offset = Some(Motion::Retarget {
            target,
            spec: self.config.settle_spring(),
        });
    }

    /// `touch_down` is where the pointer went down, so travel spent
    /// crossing the minimum distance still moves the row.
    fn begin_drag(&mut self, touch_down: Point, effects: &mut Effects) {
        let sign = self.sign();
        let geometry = self.geometry();
        // Pick the row up where it is drawn, even mid-animation.
        let visual = (sign * self.offset.value()).clamp(0.0, geometry.resistance_start);

        self.generation += 1;
        self.state.is_dragging = true;
        self.state.start_location = Some(touch_down);
        self.state.committed_offset = sign * visual;
        self.state.drag_offset = self.state.committed_offset;
        self.state.pending_offset_adjustment = 0.0;
        self.state.is_swiping_in_reveal_direction = false;
        self.state.is_full_swipe_armed = false;
        self.arm_transition = None;

        effects.announce = Some(self.id);
        effects.prepare_haptics = true;
        log::debug!("{}: drag started", self.id);
    }

    /// Folds a pointer location into the drag and returns the shaped offset.
    fn track(&mut self, location: Point, effects: &mut Effects) -> (f32, RevealGeometry) {
        let sign = self.sign();
        let geometry = self.geometry();
        let start_x = self.state.start_location.map_or(location.x, |start| start.x);
        let travel = location.x - start_x;
        let raw = |state: &RowGestureState| {
            state.committed_offset + travel + state.pending_offset_adjustment
        };

        self.state.drag_offset = raw(&self.state);
        if sign * self.state.drag_offset > 0.0 {
            self.state.is_swiping_in_reveal_direction = true;
        }
        let mut shaped = geometry.shape(sign * self.state.drag_offset);

        let past =
            self.state.is_swiping_in_reveal_direction && geometry.is_past_full_swipe(shaped);
        if past != self.state.is_full_swipe_armed {
            self.state.is_full_swipe_armed = past;
            effects.pulse = Some(if past {
                HapticPulse::Firm
            } else {
                HapticPulse::Light
            });

            let destructive = geometry.full_swipe.is_some_and(|full| full.destructive)
                || self.state.pending_offset_adjustment != 0.0;
            self.arm_transition = Some(ArmTransition {
                until_nanos: self.runtime.now_nanos().saturating_add(seconds_to_nanos(
                    if destructive {
                        self.config.destructive_arm_duration
                    } else {
                        self.config.arm_duration
                    },
                )),
                spec: self.config.arm_spring(destructive),
            });

            let adjustment = if past && destructive {
                sign * (self.config.destructive_threshold - self.config.open_slack)
            } else {
                0.0
            };
            if adjustment != self.state.pending_offset_adjustment {
                self.state.pending_offset_adjustment = adjustment;
                self.state.drag_offset = raw(&self.state);
                shaped = geometry.shape(sign * self.state.drag_offset);
            }
            log::debug!(
                "{}: full swipe {}",
                self.id,
                if past { "armed" } else { "disarmed" }
            );
        }

        let target = sign * shaped;
        let now = self.runtime.now_nanos();
        effects.offset = Some(match self.arm_transition {
            Some(transition) if now < transition.until_nanos => Motion::Retarget {
                target,
                spec: transition.spec,
            },
            _ => Motion::Snap(target),
        });
        effects.notify = true;
        (shaped, geometry)
    }

    fn drag_changed(&mut self, sample: DragSample) -> Effects {
        let mut effects = Effects::default();
        if !self.mounted || self.state.is_committed_deleted || self.gesture_superseded {
            return effects;
        }
        if !self.state.is_dragging {
            let translation = sample.translation();
            if sample.start_location.distance_to(sample.location) < self.config.min_drag_distance {
                return effects;
            }
            if translation.x.abs() < translation.y.abs() {
                log::trace!("{}: vertical drag left to the container", self.id);
                self.gesture_superseded = true;
                return effects;
            }
            self.begin_drag(sample.start_location, &mut effects);
        }
        self.track(sample.location, &mut effects);
        effects
    }

    fn drag_ended(&mut self, sample: DragSample) -> Effects {
        let mut effects = Effects::default();
        let active = self.mounted
            && !self.state.is_committed_deleted
            && !self.gesture_superseded
            && self.state.is_dragging;
        self.gesture_superseded = false;
        if !active {
            if self.mounted && !self.state.is_committed_deleted {
                self.take_queued_actions();
            }
            return effects;
        }

        let (shaped, geometry) = self.track(sample.location, &mut effects);
        let armed = self.state.is_full_swipe_armed;
        let swiping = self.state.is_swiping_in_reveal_direction;
        self.state.end_gesture();
        self.arm_transition = None;

        let velocity = if sample.velocity.x.is_finite() {
            sample.velocity.x
        } else {
            0.0
        };
        let last = self
            .actions
            .last()
            .map(|action| (action.is_destructive(), action.callback()));

        match last {
            Some((true, callback)) if armed => {
                log::debug!("{}: released armed, committing destructive action", self.id);
                self.begin_destructive_commit(callback, &mut effects);
            }
            Some((false, callback)) if armed => {
                log::debug!("{}: released armed, activating last action", self.id);
                self.settle_closed(Some(velocity), &mut effects);
                effects.invoke = Some(callback);
            }
            _ => {
                let threshold = geometry.open_threshold(&self.config);
                if swiping && geometry.reveal_extent > 0.0 && shaped > 0.0 && shaped >= threshold {
                    let target = self.sign() * geometry.reveal_extent;
                    log::debug!("{}: released at {shaped}, opening to {target}", self.id);
                    self.state.committed_offset = target;
                    self.state.drag_offset = target;
                    effects.offset = Some(Motion::Spring {
                        target,
                        spec: self.config.settle_spring(),
                        velocity,
                    });
                } else {
                    log::debug!("{}: released at {shaped}, closing", self.id);
                    self.settle_closed(Some(velocity), &mut effects);
                }
            }
        }

        if !self.state.is_committed_deleted {
            self.take_queued_actions();
            self.resettle(&mut effects);
        }
        effects.notify = true;
        effects
    }

    fn drag_cancelled(&mut self) -> Effects {
        let mut effects = Effects::default();
        let active = self.mounted
            && !self.state.is_committed_deleted
            && !self.gesture_superseded
            && self.state.is_dragging;
        self.gesture_superseded = false;
        if !active {
            return effects;
        }

        let was_open = self.sign() * self.state.committed_offset > 0.0;
        let target = if was_open {
            self.sign() * self.geometry().reveal_extent
        } else {
            0.0
        };
        log::debug!("{}: drag cancelled, settling at {target}", self.id);
        self.state.end_gesture();
        self.arm_transition = None;
        self.state.committed_offset = target;
        self.state.drag_offset = target;
        effects.offset = Some(Motion::Spring {
            target,
            spec: self.config.settle_spring(),
            velocity: 0.0,
        });
        self.take_queued_actions();
        self.resettle(&mut effects);
        effects.notify = true;
        effects
    }

    /// `velocity` of `None` keeps whatever velocity the offset already has.
    fn settle_closed(&mut self, velocity: Option<f32>, effects: &mut Effects) {
        self.state.committed_offset = 0.0;
        self.state.drag_offset = 0.0;
        self.state.pending_offset_adjustment = 0.0;
        let spec = self.config.settle_spring();
        effects.offset = Some(match velocity {
            Some(velocity) => Motion::Spring {
                target: 0.0,
                spec,
                velocity,
            },
            None => Motion::Retarget { target: 0.0, spec },
        });
    }

    fn begin_destructive_commit(&mut self, callback: Rc<dyn Fn()>, effects: &mut Effects) {
        let target = self.sign() * self.state.content_width();
        self.state.end_gesture();
        self.arm_transition = None;
        self.state.is_committed_deleted = true;
        self.state.committed_offset = target;
        self.state.drag_offset = target;
        self.generation += 1;

        let collapse = self.config.collapse_spring();
        effects.offset = Some(Motion::Retarget {
            target,
            spec: collapse,
        });
        effects.height = Some(Motion::Spring {
            target: 0.0,
            spec: collapse,
            velocity: 0.0,
        });
        effects.announce = Some(self.id);
        effects.commit = Some(PendingCommit {
            delay_nanos: seconds_to_nanos(self.config.commit_delay),
            generation: self.generation,
            callback,
        });
        effects.notify = true;
        log::debug!(
            "{}: destructive commit scheduled in {}s",
            self.id,
            self.config.commit_delay
        );
    }

    fn close(&mut self) -> Effects {
        let mut effects = Effects::default();
        if !self.mounted || self.state.is_committed_deleted {
            return effects;
        }
        let was_dragging = self.state.is_dragging;
        if was_dragging {
            self.gesture_superseded = true;
        }
        let at_rest = !was_dragging
            && self.state.committed_offset == 0.0
            && self.state.pending_offset_adjustment == 0.0
            && self.offset.target() == 0.0;
        self.state.end_gesture();
        self.arm_transition = None;
        if at_rest {
            return effects;
        }

        log::debug!("{}: closing", self.id);
        self.generation += 1;
        self.settle_closed(None, &mut effects);
        self.take_queued_actions();
        effects.notify = true;
        effects
    }
}

impl<L: 'static> RowSwipeController<L> {
    pub fn new(env: &RowEnvironment, options: SwipeOptions, actions: Vec<SwipeAction<L>>) -> Self {
        let id = env.runtime.allocate_row_id();
        let offset = Animatable::new(0.0, env.runtime.clone());
        let height = Animatable::new(1.0, env.runtime.clone());
        let action_count = actions.len();

        let inner = Rc::new(RefCell::new(RowInner {
            id,
            runtime: env.runtime.clone(),
            hub: env.hub.clone(),
            config: env.config,
            layout_direction: env.layout_direction,
            haptics: Rc::clone(&env.haptics),
            options,
            actions,
            queued_actions: None,
            state: RowGestureState::default(),
            offset: offset.clone(),
            height: height.clone(),
            arm_transition: None,
            gesture_superseded: false,
            generation: 0,
            mounted: true,
            commit_task: None,
            subscription: None,
            animation_observers: Vec::new(),
            on_change: None,
        }));

        let weak = Rc::downgrade(&inner);
        let subscription = env.hub.subscribe({
            let weak = weak.clone();
            move |signal| {
                if let Some(strong) = weak.upgrade() {
                    Self::on_close_signal(&strong, signal);
                }
            }
        });
        let observers: Vec<StateObserver> = [offset.state(), height.state()]
            .into_iter()
            .map(|state| {
                let weak = weak.clone();
                state.subscribe(move |_| {
                    if let Some(strong) = weak.upgrade() {
                        Self::notify(&strong);
                    }
                })
            })
            .collect();
        {
            let mut row = inner.borrow_mut();
            row.subscription = Some(subscription);
            row.animation_observers = observers;
        }

        log::debug!("{id}: mounted with {action_count} actions");
        Self { inner }
    }

    pub fn id(&self) -> RowId {
        self.inner.borrow().id
    }

    pub fn options(&self) -> SwipeOptions {
        self.inner.borrow().options
    }

    pub fn action_count(&self) -> usize {
        self.inner.borrow().actions.len()
    }

    /// Copy of the current gesture state.
    pub fn gesture_state(&self) -> RowGestureState {
        self.inner.borrow().state.clone()
    }

    pub fn render_state(&self) -> RowRenderState {
        self.inner.borrow().render_state()
    }

    /// Indices of the actions in the order they are drawn.
    pub fn visual_action_order(&self) -> Vec<usize> {
        let inner = self.inner.borrow();
        inner.options.edge.visual_order(inner.actions.len())
    }

    /// Whether the row rests open with its actions revealed.
    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_open()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    /// Called with a fresh render state after every change, including
    /// every animation frame.
    pub fn set_on_change(&self, on_change: impl Fn(&RowRenderState) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(on_change));
    }

    pub fn on_drag_changed(&self, sample: DragSample) {
        let effects = self.inner.borrow_mut().drag_changed(sample);
        Self::apply(&self.inner, effects);
    }

    pub fn on_drag_ended(&self, sample: DragSample) {
        let effects = self.inner.borrow_mut().drag_ended(sample);
        Self::apply(&self.inner, effects);
    }

    /// The host cancelled the pointer stream; the row returns to where it
    /// rested before the drag and never commits.
    pub fn on_drag_cancelled(&self) {
        let effects = self.inner.borrow_mut().drag_cancelled();
        Self::apply(&self.inner, effects);
    }

    /// Activates the action at `index` as if its button was tapped.
    pub fn tap_action(&self, index: usize) -> Result<(), SwipeError> {
        let effects = {
            let mut inner = self.inner.borrow_mut();
            if !inner.mounted {
                return Err(SwipeError::RowUnmounted { row: inner.id });
            }
            let len = inner.actions.len();
            let Some(action) = inner.actions.get(index) else {
                return Err(SwipeError::ActionIndexOutOfRange { index, len });
            };
            if inner.state.is_committed_deleted {
                return Ok(());
            }
            let callback = action.callback();
            let commits = index + 1 == len
                && action.is_destructive()
                && inner.options.allows_full_swipe;

            let mut effects = Effects::default();
            if commits {
                inner.begin_destructive_commit(callback, &mut effects);
            } else {
                if inner.state.is_dragging {
                    inner.gesture_superseded = true;
                }
                inner.state.end_gesture();
                inner.arm_transition = None;
                inner.settle_closed(None, &mut effects);
                inner.take_queued_actions();
                effects.invoke = Some(callback);
                effects.notify = true;
            }
            effects
        };
        Self::apply(&self.inner, effects);
        Ok(())
    }

    /// Animates the row closed, as a close broadcast would.
    pub fn close(&self) {
        let effects = self.inner.borrow_mut().close();
        Self::apply(&self.inner, effects);
    }

    /// Replaces the action list. During a drag the list is held until the
    /// gesture ends.
    pub fn set_actions(&self, actions: Vec<SwipeAction<L>>) {
        let effects = {
            let mut inner = self.inner.borrow_mut();
            if !inner.mounted {
                return;
            }
            let mut effects = Effects::default();
            if inner.state.is_dragging || inner.state.is_committed_deleted {
                inner.queued_actions = Some(actions);
            } else {
                inner.install_actions(actions);
                inner.resettle(&mut effects);
                effects.notify = true;
            }
            effects
        };
        Self::apply(&self.inner, effects);
    }

    /// Stops the row for good: leaves the hub, drops pending work and stops
    /// notifying. Safe to call more than once.
    pub fn unmount(&self) {
        let (subscription, observers, task, offset, height) = {
            let Ok(mut inner) = self.inner.try_borrow_mut() else {
                log::warn!("row unmounted while busy; skipping");
                return;
            };
            if !inner.mounted {
                return;
            }
            inner.mounted = false;
            inner.generation += 1;
            inner.on_change = None;
            inner.queued_actions = None;
            log::debug!("{}: unmounted", inner.id);
            (
                inner.subscription.take(),
                std::mem::take(&mut inner.animation_observers),
                inner.commit_task.take(),
                inner.offset.clone(),
                inner.height.clone(),
            )
        };
        drop(task);
        drop(subscription);
        drop(observers);
        offset.snap_to(offset.value());
        height.snap_to(height.value());
    }

    fn on_close_signal(this: &Rc<RefCell<RowInner<L>>>, signal: CloseSignal) {
        let effects = {
            let Ok(mut inner) = this.try_borrow_mut() else {
                log::warn!("close signal arrived while the row was busy; ignored");
                return;
            };
            if !signal.applies_to(inner.id) {
                return;
            }
            inner.close()
        };
        Self::apply(this, effects);
    }

    fn finish_commit(this: &Rc<RefCell<RowInner<L>>>, generation: u64, callback: Rc<dyn Fn()>) {
        let current = {
            let inner = this.borrow();
            inner.mounted && inner.generation == generation && inner.state.is_committed_deleted
        };
        if !current {
            log::debug!("stale destructive commit skipped");
            return;
        }

        callback();

        let effects = {
            let mut inner = this.borrow_mut();
            // The callback may have unmounted or touched the row.
            if !inner.mounted || inner.generation != generation {
                return;
            }
            let task = inner.commit_task.take();
            inner.state.reset();
            inner.arm_transition = None;
            inner.gesture_superseded = false;
            inner.generation += 1;
            inner.take_queued_actions();
            drop(task);
            log::debug!("{}: destructive commit finished, row reset", inner.id);
            Effects {
                offset: Some(Motion::Snap(0.0)),
                height: Some(Motion::Snap(1.0)),
                notify: true,
                ..Effects::default()
            }
        };
        Self::apply(this, effects);
    }

    fn apply(this: &Rc<RefCell<RowInner<L>>>, effects: Effects) {
        let (hub, haptics, offset, height, runtime) = {
            let inner = this.borrow();
            (
                inner.hub.clone(),
                Rc::clone(&inner.haptics),
                inner.offset.clone(),
                inner.height.clone(),
                inner.runtime.clone(),
            )
        };

        if let Some(origin) = effects.announce {
            hub.announce_gesture_start(origin);
        }
        if effects.prepare_haptics {
            haptics.prepare();
        }
        if let Some(pulse) = effects.pulse {
            haptics.pulse(pulse);
        }
        if let Some(motion) = effects.offset {
            motion.run(&offset);
        }
        if let Some(motion) = effects.height {
            motion.run(&height);
        }
        if let Some(commit) = effects.commit {
            let weak = Rc::downgrade(this);
            let PendingCommit {
                delay_nanos,
                generation,
                callback,
            } = commit;
            let task = runtime.schedule_after(delay_nanos, move || {
                if let Some(strong) = weak.upgrade() {
                    Self::finish_commit(&strong, generation, callback);
                }
            });
            this.borrow_mut().commit_task = Some(task);
        }
        if let Some(callback) = effects.invoke {
            callback();
        }
        if effects.notify {
            Self::notify(this);
        }
    }

    fn notify(this: &Rc<RefCell<RowInner<L>>>) {
        let (callback, state) = {
            let Ok(inner) = this.try_borrow() else {
                return;
            };
            if !inner.mounted {
                return;
            }
            let Some(callback) = inner.on_change.clone() else {
                return;
            };
            (callback, inner.render_state())
        };
        callback(&state);
    }
}

impl<L: 'static> DragGestureHandler for RowSwipeController<L> {
    fn on_drag_changed(&self, sample: DragSample) {
        RowSwipeController::on_drag_changed(self, sample);
    }

    fn on_drag_ended(&self, sample: DragSample) {
        RowSwipeController::on_drag_ended(self, sample);
    }

    fn on_drag_cancelled(&self) {
        RowSwipeController::on_drag_cancelled(self);
    }
}

impl<L: 'static> MeasurementSink for RowSwipeController<L> {
    fn report_content_size(&self, size: Size) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            if !inner.mounted || inner.state.measured_content_size == Some(size) {
                false
            } else {
                inner.state.measured_content_size = Some(size);
                true
            }
        };
        if changed {
            Self::notify(&self.inner);
        }
    }

    fn report_action_size(&self, index: usize, size: Size) {
        let effects = {
            let mut inner = self.inner.borrow_mut();
            if !inner.mounted || inner.state.measured_action_sizes.get(&index) == Some(&size) {
                return;
            }
            inner.state.measured_action_sizes.insert(index, size);
            let mut effects = Effects {
                notify: true,
                ..Effects::default()
            };
            inner.resettle(&mut effects);
            effects
        };
        Self::apply(&self.inner, effects);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
