//! Platform clock abstraction.
//!
//! The runtime itself only knows virtual nanoseconds. Hosts that pump frames
//! in real time translate their wall clock through a [`Clock`].

use web_time::Instant;

/// Provides timing information for the host loop.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time`, which works on native targets and wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Maps a host clock onto runtime frame times, starting at zero.
pub struct FrameTimer<C: Clock> {
    clock: C,
    origin: C::Instant,
}

impl<C: Clock> FrameTimer<C> {
    pub fn new(clock: C) -> Self {
        let origin = clock.now();
        Self { clock, origin }
    }

    /// Nanoseconds since the timer was created.
    pub fn frame_time_nanos(&self) -> u64 {
        self.clock.elapsed_nanos(self.origin)
    }
}
