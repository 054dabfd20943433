//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    /// Warning tint used by destructive actions.
    pub const SYSTEM_RED: Color = Color::from_rgb_u8(255, 59, 48);
    /// Neutral tint used by normal actions without an override.
    pub const SYSTEM_GRAY: Color = Color::from_rgb_u8(142, 142, 147);
    pub const SYSTEM_BLUE: Color = Color::from_rgb_u8(0, 122, 255);
    pub const SYSTEM_ORANGE: Color = Color::from_rgb_u8(255, 149, 0);
}
