//! Test doubles that record what the code under test did.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipekit_foundation::{HapticFeedback, HapticPulse};

/// Haptics device that remembers every pulse.
#[derive(Default)]
pub struct RecordingHaptics {
    pulses: RefCell<Vec<HapticPulse>>,
    prepared: Cell<usize>,
}

impl RecordingHaptics {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pulses(&self) -> Vec<HapticPulse> {
        self.pulses.borrow().clone()
    }

    pub fn count(&self, pulse: HapticPulse) -> usize {
        self.pulses
            .borrow()
            .iter()
            .filter(|recorded| **recorded == pulse)
            .count()
    }

    pub fn prepare_count(&self) -> usize {
        self.prepared.get()
    }

    pub fn clear(&self) {
        self.pulses.borrow_mut().clear();
        self.prepared.set(0);
    }
}

impl HapticFeedback for RecordingHaptics {
    fn prepare(&self) {
        self.prepared.set(self.prepared.get() + 1);
    }

    fn pulse(&self, pulse: HapticPulse) {
        self.pulses.borrow_mut().push(pulse);
    }
}

/// Counts invocations of the callbacks it hands out.
#[derive(Clone, Default)]
pub struct CallCounter {
    count: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that bumps this counter.
    pub fn callback(&self) -> impl Fn() + 'static {
        let count = Rc::clone(&self.count);
        move || count.set(count.get() + 1)
    }

    pub fn get(&self) -> usize {
        self.count.get()
    }
}
