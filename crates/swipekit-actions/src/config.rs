//! Tuned constants for the swipe feel.
//!
//! The defaults reproduce the native list-row resistance and timing. They
//! are visually tuned values, not derived physics.

use swipekit_animation::SpringSpec;
use swipekit_foundation::SWIPE_MIN_DRAG_DISTANCE;

use crate::edge::Edge;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Pointer travel before a drag starts moving the row.
    pub min_drag_distance: f32,
    /// Narrowest width an action is revealed at, whatever it measured.
    pub min_action_width: f32,
    /// Distance from the far edge at which a destructive full swipe arms.
    pub destructive_threshold: f32,
    /// Gap kept at the far edge before resistance applies on a destructive full swipe.
    pub destructive_full_swipe_inset: f32,
    /// Slack subtracted from half the reveal extent when deciding to stay open.
    pub open_slack: f32,
    /// Resistance exponent past the extent of a destructive full swipe.
    pub destructive_overshoot_exponent: f32,
    /// Resistance exponent everywhere else, including wrong-direction drags.
    pub resistance_exponent: f32,
    /// Open/close spring duration in seconds.
    pub settle_duration: f32,
    /// Spring duration while a destructive full swipe arms or disarms.
    pub destructive_arm_duration: f32,
    /// Spring duration while a non-destructive full swipe arms or disarms.
    pub arm_duration: f32,
    /// Row collapse spring duration after a destructive commit.
    pub collapse_duration: f32,
    /// Delay between a destructive commit and its callback.
    pub commit_delay: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_drag_distance: SWIPE_MIN_DRAG_DISTANCE,
            min_action_width: 73.0,
            destructive_threshold: 120.0,
            destructive_full_swipe_inset: 16.0,
            open_slack: 32.0,
            destructive_overshoot_exponent: 0.52,
            resistance_exponent: 0.68,
            settle_duration: 0.68,
            destructive_arm_duration: 0.51,
            arm_duration: 0.31,
            collapse_duration: 0.28,
            commit_delay: 0.282,
        }
    }
}

impl SwipeConfig {
    pub fn with_min_drag_distance(mut self, distance: f32) -> Self {
        self.min_drag_distance = distance;
        self
    }

    pub fn with_min_action_width(mut self, width: f32) -> Self {
        self.min_action_width = width;
        self
    }

    pub fn with_destructive_threshold(mut self, threshold: f32) -> Self {
        self.destructive_threshold = threshold;
        self
    }

    pub fn with_resistance_exponents(mut self, destructive_overshoot: f32, resistance: f32) -> Self {
        self.destructive_overshoot_exponent = destructive_overshoot;
        self.resistance_exponent = resistance;
        self
    }

    pub fn with_commit_delay(mut self, seconds: f32) -> Self {
        self.commit_delay = seconds;
        self
    }

    pub(crate) fn settle_spring(&self) -> SpringSpec {
        SpringSpec::with_duration(self.settle_duration, 0.0)
    }

    pub(crate) fn arm_spring(&self, destructive: bool) -> SpringSpec {
        let duration = if destructive {
            self.destructive_arm_duration
        } else {
            self.arm_duration
        };
        SpringSpec::with_duration(duration, 0.0)
    }

    pub(crate) fn collapse_spring(&self) -> SpringSpec {
        SpringSpec {
            position_threshold: 0.001,
            velocity_threshold: 0.01,
            ..SpringSpec::with_duration(self.collapse_duration, 0.0)
        }
    }
}

/// Per-row attachment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOptions {
    pub edge: Edge,
    pub allows_full_swipe: bool,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            edge: Edge::Trailing,
            allows_full_swipe: true,
        }
    }
}

impl SwipeOptions {
    pub fn edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    pub fn allows_full_swipe(mut self, allows: bool) -> Self {
        self.allows_full_swipe = allows;
        self
    }
}
