/// Physical reading direction of the hosting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// +1 for left-to-right, -1 for right-to-left.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            LayoutDirection::LeftToRight => 1.0,
            LayoutDirection::RightToLeft => -1.0,
        }
    }

    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }
}
