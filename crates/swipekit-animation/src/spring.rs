//! Damped harmonic oscillator used by every swipe animation.
//!
//! Springs are solved in closed form rather than integrated, so the value at
//! a given elapsed time does not depend on the frame rate.

use std::f64::consts::PI;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold (units per second) to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold (units) to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Create a spring with default values.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.1,
            position_threshold: 0.01,
        }
    }

    /// Spring whose undamped period equals `duration_seconds`.
    ///
    /// `bounce` of 0 gives a critically damped spring, positive values
    /// overshoot, negative values are over-damped.
    pub fn with_duration(duration_seconds: f32, bounce: f32) -> Self {
        let duration = if duration_seconds.is_finite() && duration_seconds > 0.0 {
            duration_seconds as f64
        } else {
            0.001
        };
        let angular = 2.0 * PI / duration;
        let bounce = bounce.clamp(-0.99, 0.99);
        let damping_ratio = if bounce >= 0.0 {
            1.0 - bounce
        } else {
            1.0 / (1.0 + bounce)
        };
        Self {
            damping_ratio,
            stiffness: (angular * angular) as f32,
            ..Self::default_spring()
        }
    }

    /// Position and velocity of a spring released at displacement
    /// `initial_displacement` with `initial_velocity`, after `elapsed_seconds`.
    pub fn motion_at(
        &self,
        initial_displacement: f32,
        initial_velocity: f32,
        elapsed_seconds: f64,
    ) -> SpringMotion {
        let x0 = initial_displacement as f64;
        let v0 = initial_velocity as f64;
        let t = elapsed_seconds.max(0.0);
        let omega = (self.stiffness.max(f32::EPSILON) as f64).sqrt();
        let zeta = self.damping_ratio.max(0.0) as f64;

        let (displacement, velocity) = if (zeta - 1.0).abs() < 1e-6 {
            let decay = (-omega * t).exp();
            let b = v0 + omega * x0;
            ((x0 + b * t) * decay, (v0 - omega * b * t) * decay)
        } else if zeta < 1.0 {
            let a = zeta * omega;
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-a * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let b = (v0 + a * x0) / damped;
            (
                decay * (x0 * cos + b * sin),
                decay * (v0 * cos - ((a * v0 + omega * omega * x0) / damped) * sin),
            )
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        };

        SpringMotion {
            displacement: displacement as f32,
            velocity: velocity as f32,
        }
    }

    /// Whether a motion is close enough to rest to snap onto the target.
    pub fn is_settled(&self, motion: SpringMotion) -> bool {
        motion.displacement.abs() < self.position_threshold
            && motion.velocity.abs() < self.velocity_threshold
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Displacement from the target and velocity at one instant of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringMotion {
    pub displacement: f32,
    pub velocity: f32,
}
