//! Pure math/data shared by the swipekit crates.
//!
//! Geometry is expressed in logical units along the physical axes: `x` grows
//! to the right regardless of layout direction.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Size};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
