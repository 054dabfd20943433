//! Frame-clock driven spring animations for swipekit.

mod animation;
mod spring;

pub use animation::Animatable;
pub use spring::{SpringMotion, SpringSpec};
