use std::time::Duration;

use swipekit_core::platform::{FrameTimer, SystemClock};
use swipekit_core::{seconds_to_nanos, Runtime, RuntimeHandle};

pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const FRAME_NANOS: u64 = 16_000_000;

/// Longest a host waits for animations to finish.
const IDLE_TIMEOUT_SECONDS: f32 = 10.0;

/// How frame times are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep between frames and stamp them with the system clock.
    RealTime,
    /// Advance a fixed 16ms per frame without sleeping.
    Virtual,
}

/// Owns the runtime and pumps its frames.
pub struct Host {
    runtime: Runtime,
    timer: Option<FrameTimer<SystemClock>>,
}

impl Host {
    pub fn new(pacing: Pacing) -> Self {
        let timer = match pacing {
            Pacing::RealTime => Some(FrameTimer::new(SystemClock)),
            Pacing::Virtual => None,
        };
        Self {
            runtime: Runtime::new(),
            timer,
        }
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn now_millis(&self) -> i64 {
        (self.runtime.handle().now_nanos() / 1_000_000) as i64
    }

    pub fn frame(&self) {
        let handle = self.runtime.handle();
        match &self.timer {
            Some(timer) => {
                std::thread::sleep(FRAME_INTERVAL);
                handle.advance_frame(timer.frame_time_nanos());
            }
            None => handle.advance_frame(handle.now_nanos() + FRAME_NANOS),
        }
    }

    pub fn run_for(&self, seconds: f32) {
        let handle = self.runtime.handle();
        let end = handle.now_nanos() + seconds_to_nanos(seconds);
        while handle.now_nanos() < end {
            self.frame();
        }
    }

    /// Pumps frames until nothing is animating or scheduled.
    pub fn run_until_idle(&self) {
        let handle = self.runtime.handle();
        let deadline = handle.now_nanos() + seconds_to_nanos(IDLE_TIMEOUT_SECONDS);
        while handle.has_pending_work() {
            if handle.now_nanos() >= deadline {
                log::warn!("still animating after {IDLE_TIMEOUT_SECONDS}s, giving up");
                return;
            }
            self.frame();
        }
    }
}
