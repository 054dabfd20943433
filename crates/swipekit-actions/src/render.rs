//! What the rendering layer draws for one row.

use smallvec::SmallVec;

/// Snapshot of everything needed to draw a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRenderState {
    /// Horizontal translation of the row content; positive moves it right.
    pub content_offset: f32,
    /// Action indices in the order they are laid out, leading to trailing.
    pub visual_order: SmallVec<[usize; 4]>,
    /// Width of each action, in `visual_order` order.
    pub action_widths: SmallVec<[f32; 4]>,
    /// Row height as a fraction of its measured height; shrinks to zero on a
    /// destructive commit.
    pub height_fraction: f32,
    pub is_full_swipe_armed: bool,
    pub is_deleted: bool,
    pub is_dragging: bool,
}

impl RowRenderState {
    /// Width of the action at `index` in the supplied order.
    pub fn width_of(&self, index: usize) -> f32 {
        self.visual_order
            .iter()
            .position(|candidate| *candidate == index)
            .and_then(|slot| self.action_widths.get(slot).copied())
            .unwrap_or(0.0)
    }

    /// Sum of all action widths.
    pub fn revealed_width(&self) -> f32 {
        self.action_widths.iter().sum()
    }
}
