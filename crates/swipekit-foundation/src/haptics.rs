//! Haptic feedback capability.
//!
//! Haptic devices are shared, stateless and fire-and-forget. Hosts without
//! haptics pass [`NoHaptics`].

/// The two pulse kinds a row emits when a full swipe arms or disarms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticPulse {
    /// Emitted when the full-swipe threshold is crossed outwards.
    Firm,
    /// Emitted when the full-swipe threshold is crossed back.
    Light,
}

pub trait HapticFeedback {
    /// Warm up the device ahead of a likely pulse. Optional.
    fn prepare(&self) {}

    fn pulse(&self, pulse: HapticPulse);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn pulse(&self, _pulse: HapticPulse) {}
}
