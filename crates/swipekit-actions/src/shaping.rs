//! Offset shaping: how far the content moves for a given drag, and how wide
//! each action is at a given offset.
//!
//! Everything here works on *signed* offsets, positive in the reveal
//! direction, so the same code serves both edges and both layout directions.

use smallvec::SmallVec;

use swipekit_core::collections::map::HashMap;
use swipekit_ui_graphics::Size;

use crate::config::SwipeConfig;

/// Full-swipe parameters for one row, present only when a full swipe is possible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullSwipe {
    /// Shaped offset past which releasing commits the last action.
    pub threshold: f32,
    /// Whether the last action is destructive.
    pub destructive: bool,
}

/// Geometry derived from the configuration, action list and measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGeometry {
    /// Offset at which every action shows at its natural width.
    pub reveal_extent: f32,
    /// Offset past which resistance damping applies.
    pub resistance_start: f32,
    pub full_swipe: Option<FullSwipe>,
    resistance_exponent: f32,
    overshoot_exponent: f32,
}

/// Natural width of one action: its measurement, but never below the
/// configured minimum. A missing measurement counts as zero.
pub fn natural_action_width(config: &SwipeConfig, measured: Option<&Size>) -> f32 {
    let measured = measured.map(Size::sanitized_width).unwrap_or(0.0);
    config.min_action_width.max(0.0).max(measured)
}

/// Sum of the natural widths of the first `action_count` actions.
pub fn reveal_extent(
    config: &SwipeConfig,
    action_count: usize,
    measured: &HashMap<usize, Size>,
) -> f32 {
    (0..action_count)
        .map(|index| natural_action_width(config, measured.get(&index)))
        .sum()
}

impl RevealGeometry {
    pub fn compute(
        config: &SwipeConfig,
        action_count: usize,
        last_is_destructive: bool,
        allows_full_swipe: bool,
        content_width: f32,
        measured: &HashMap<usize, Size>,
    ) -> Self {
        let reveal_extent = reveal_extent(config, action_count, measured);
        let content_width = if content_width.is_finite() {
            content_width.max(0.0)
        } else {
            0.0
        };

        let full_swipe = if allows_full_swipe && action_count > 0 {
            let threshold = if last_is_destructive {
                content_width - config.destructive_threshold
            } else {
                content_width / 2.0
            };
            (threshold > 0.0).then_some(FullSwipe {
                threshold,
                destructive: last_is_destructive,
            })
        } else {
            None
        };

        let (resistance_start, overshoot_exponent) = match full_swipe {
            Some(FullSwipe {
                destructive: true, ..
            }) => (
                content_width - config.destructive_full_swipe_inset,
                config.destructive_overshoot_exponent,
            ),
            Some(FullSwipe {
                destructive: false,
                ..
            }) => (content_width / 2.0, config.resistance_exponent),
            None => (reveal_extent, config.resistance_exponent),
        };

        Self {
            reveal_extent,
            resistance_start: resistance_start.max(reveal_extent),
            full_swipe,
            resistance_exponent: config.resistance_exponent,
            overshoot_exponent,
        }
    }

    /// Maps a raw signed drag offset onto the visual signed offset.
    ///
    /// Linear up to `resistance_start`, damped beyond it, and lightly damped
    /// in the wrong direction so it never reveals anything.
    pub fn shape(&self, signed_offset: f32) -> f32 {
        if !signed_offset.is_finite() {
            return 0.0;
        }
        if signed_offset < 0.0 {
            -signed_offset.abs().powf(self.resistance_exponent)
        } else if signed_offset <= self.resistance_start {
            signed_offset
        } else {
            let excess = signed_offset - self.resistance_start;
            self.resistance_start + excess.powf(self.overshoot_exponent)
        }
    }

    /// Smallest release offset that leaves the row open.
    pub fn open_threshold(&self, config: &SwipeConfig) -> f32 {
        self.reveal_extent / 2.0 - config.open_slack
    }

    /// Whether `shaped` lies past the full-swipe threshold.
    pub fn is_past_full_swipe(&self, shaped: f32) -> bool {
        self.full_swipe
            .map(|full| shaped > full.threshold)
            .unwrap_or(false)
    }
}

/// Rendered phase a row's actions are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPhase {
    Revealing,
    FullSwipeArmed,
    Deleted,
}

/// Width of every action, indexed like the action list.
///
/// Revealing: each action gets its share of the shaped offset in
/// proportion to its natural width. Armed: the last action takes the whole
/// offset. Deleted: the last action spans the original content width.
pub fn action_widths(
    config: &SwipeConfig,
    geometry: &RevealGeometry,
    action_count: usize,
    measured: &HashMap<usize, Size>,
    shaped_offset: f32,
    content_width: f32,
    phase: WidthPhase,
) -> SmallVec<[f32; 4]> {
    let mut widths: SmallVec<[f32; 4]> = SmallVec::from_elem(0.0, action_count);
    if action_count == 0 {
        return widths;
    }
    let revealed = if shaped_offset.is_finite() {
        shaped_offset.max(0.0)
    } else {
        0.0
    };
    let last = action_count - 1;

    match phase {
        WidthPhase::Deleted => widths[last] = content_width.max(0.0),
        WidthPhase::FullSwipeArmed => widths[last] = revealed,
        WidthPhase::Revealing => {
            if geometry.reveal_extent > 0.0 {
                let fraction = revealed / geometry.reveal_extent;
                for (index, width) in widths.iter_mut().enumerate() {
                    *width = fraction * natural_action_width(config, measured.get(&index));
                }
            }
        }
    }
    widths
}

#[cfg(test)]
#[path = "tests/shaping_tests.rs"]
mod tests;
