//! Host-facing surface: a container scope per scrollable region and the
//! rows attached inside it.

use std::rc::Rc;

use swipekit_core::{RowId, RuntimeHandle};
use swipekit_foundation::{DragDetector, HapticFeedback, LayoutDirection, NoHaptics, PointerEvent};

use crate::action::SwipeAction;
use crate::config::{SwipeConfig, SwipeOptions};
use crate::controller::{RowEnvironment, RowSwipeController};
use crate::hub::{ContainerActivity, SwipeHub};
use crate::render::RowRenderState;

/// Label of the action created by [`SwipeContainer::attach_delete_shortcut`].
pub const DELETE_LABEL: &str = "Delete";

/// One hub scope around a scrollable region of rows.
///
/// Apply once per independently scrolling region; rows attached through the
/// same container close each other.
pub struct SwipeContainer<C> {
    content: C,
    env: RowEnvironment,
}

/// Establishes a swipe container around `content`.
pub fn wrap_with_swipe_container<C>(content: C, runtime: RuntimeHandle) -> SwipeContainer<C> {
    SwipeContainer {
        content,
        env: RowEnvironment {
            runtime,
            hub: SwipeHub::new(),
            config: SwipeConfig::default(),
            layout_direction: LayoutDirection::default(),
            haptics: Rc::new(NoHaptics),
        },
    }
}

impl<C> SwipeContainer<C> {
    pub fn with_config(mut self, config: SwipeConfig) -> Self {
        self.env.config = config;
        self
    }

    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.env.layout_direction = layout_direction;
        self
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.env.haptics = haptics;
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn hub(&self) -> &SwipeHub {
        &self.env.hub
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.env.runtime
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.env.config
    }

    /// Trailing actions with full swipe enabled.
    pub fn attach_swipe_actions<R, L: 'static>(
        &self,
        content: R,
        actions: Vec<SwipeAction<L>>,
    ) -> SwipeRow<R, L> {
        self.attach_swipe_actions_with(content, SwipeOptions::default(), actions)
    }

    pub fn attach_swipe_actions_with<R, L: 'static>(
        &self,
        content: R,
        options: SwipeOptions,
        actions: Vec<SwipeAction<L>>,
    ) -> SwipeRow<R, L> {
        SwipeRow {
            content,
            controller: RowSwipeController::new(&self.env, options, actions),
            detector: DragDetector::new(),
        }
    }

    /// A single destructive "Delete" action on the trailing edge.
    pub fn attach_delete_shortcut<R>(
        &self,
        content: R,
        on_delete: impl Fn() + 'static,
    ) -> SwipeRow<R, String> {
        self.attach_delete_shortcut_with(content, SwipeOptions::default(), on_delete)
    }

    pub fn attach_delete_shortcut_with<R>(
        &self,
        content: R,
        options: SwipeOptions,
        on_delete: impl Fn() + 'static,
    ) -> SwipeRow<R, String> {
        let delete = SwipeAction::destructive(DELETE_LABEL.to_string(), on_delete);
        self.attach_swipe_actions_with(content, options, vec![delete])
    }

    pub fn observe_container_activity(&self, activity: ContainerActivity) {
        self.env.hub.observe_container_activity(activity);
    }

    pub fn on_tap(&self) {
        self.observe_container_activity(ContainerActivity::Tap);
    }

    pub fn on_scroll_offset_changed(&self, offset: f32) {
        self.observe_container_activity(ContainerActivity::ScrollOffsetChanged(offset));
    }
}

/// A row with swipe actions attached. Dropping it unmounts the row.
pub struct SwipeRow<R, L: 'static = String> {
    content: R,
    controller: RowSwipeController<L>,
    detector: DragDetector,
}

impl<R, L: 'static> SwipeRow<R, L> {
    pub fn id(&self) -> RowId {
        self.controller.id()
    }

    pub fn content(&self) -> &R {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut R {
        &mut self.content
    }

    pub fn controller(&self) -> &RowSwipeController<L> {
        &self.controller
    }

    pub fn render_state(&self) -> RowRenderState {
        self.controller.render_state()
    }

    /// Routes raw pointer input through the row's drag detector.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.detector.on_pointer_event(event, &self.controller)
    }
}

impl<R, L: 'static> Drop for SwipeRow<R, L> {
    fn drop(&mut self) {
        self.controller.unmount();
    }
}
