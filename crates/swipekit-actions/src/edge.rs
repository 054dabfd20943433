use swipekit_foundation::LayoutDirection;

/// Logical side of the row the actions are revealed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edge {
    Leading,
    #[default]
    Trailing,
}

impl Edge {
    /// Physical direction (+1 right, -1 left) the content must move to
    /// reveal actions on this edge.
    ///
    /// Trailing actions in a left-to-right layout sit on the right, so the
    /// content is dragged left; each flip of edge or layout direction
    /// mirrors the sign.
    #[inline]
    pub fn reveal_sign(self, layout_direction: LayoutDirection) -> f32 {
        let logical = match self {
            Edge::Leading => 1.0,
            Edge::Trailing => -1.0,
        };
        logical * layout_direction.sign()
    }

    /// Action indices in the order the rendering layer stacks them along
    /// the row's leading-to-trailing axis.
    pub fn visual_order(self, action_count: usize) -> Vec<usize> {
        match self {
            Edge::Leading => (0..action_count).collect(),
            Edge::Trailing => (0..action_count).rev().collect(),
        }
    }
}
