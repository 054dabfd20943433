//! Release velocity estimation for drags.
//!
//! Each axis uses the impulse strategy: the velocity is derived from the
//! kinetic energy the recent pointer movement would have imparted, which is
//! robust to uneven sample spacing.

use swipekit_ui_graphics::Point;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

#[derive(Clone)]
struct AxisTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl AxisTracker {
    fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    fn push(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Walk backwards collecting (age, position) until the horizon or a pause.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous_time = newest.time_ms;

        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            times[count] = -(age as f32);
            previous_time = sample.time_ms;
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }
}

/// Velocity in units per millisecond; samples are ordered newest first.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let dt = times[i - 1] - times[i];
        if dt == 0.0 {
            continue;
        }
        let segment_velocity = (positions[i - 1] - positions[i]) / dt;
        let previous_velocity = energy_to_velocity(work);
        work += (segment_velocity - previous_velocity) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Two-axis pointer velocity tracker.
#[derive(Clone)]
pub struct VelocityTracker {
    x: AxisTracker,
    y: AxisTracker,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            x: AxisTracker::new(),
            y: AxisTracker::new(),
        }
    }

    /// Records the pointer position at `time_ms`.
    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.push(time_ms, position.x);
        self.y.push(time_ms, position.y);
    }

    /// Velocity in units/second, each axis clamped to `±max_velocity`.
    ///
    /// Returns zero for an axis without enough recent samples.
    pub fn velocity_with_max(&self, max_velocity: f32) -> Point {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return Point::ZERO;
        }
        let clamp = |velocity: f32| {
            if velocity.is_nan() {
                0.0
            } else {
                velocity.clamp(-max_velocity, max_velocity)
            }
        };
        Point::new(clamp(self.x.velocity()), clamp(self.y.velocity()))
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
