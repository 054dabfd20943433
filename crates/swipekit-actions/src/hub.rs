//! Close coordination between the rows of one container.
//!
//! A [`SwipeHub`] is created by a container and handed to every row it
//! attaches. Rows subscribe on mount and announce when a drag starts; the
//! container reports taps and scrolls. Every announcement becomes a
//! [`CloseSignal`] delivered to every subscriber.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipekit_core::RowId;

/// "Close if you are open", optionally exempting the row that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseSignal {
    /// Row whose drag triggered the signal; `None` for container activity.
    pub origin: Option<RowId>,
}

impl CloseSignal {
    pub fn applies_to(&self, row: RowId) -> bool {
        self.origin != Some(row)
    }
}

/// Activity of the hosting scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerActivity {
    Tap,
    /// The container's scroll position is now `offset`.
    ScrollOffsetChanged(f32),
}

type Subscriber = Rc<dyn Fn(CloseSignal)>;

struct HubInner {
    subscribers: Vec<(u64, Subscriber)>,
    next_subscriber: u64,
    last_scroll_offset: f32,
}

/// Broadcast channel scoped to one container.
#[derive(Clone)]
pub struct SwipeHub {
    inner: Rc<RefCell<HubInner>>,
}

impl Default for SwipeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeHub {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                subscribers: Vec::new(),
                next_subscriber: 1,
                last_scroll_offset: 0.0,
            })),
        }
    }

    /// Registers `on_close` for every future broadcast until the returned
    /// subscription is dropped.
    pub fn subscribe(&self, on_close: impl Fn(CloseSignal) + 'static) -> HubSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push((id, Rc::new(on_close)));
        HubSubscription {
            hub: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// A row started dragging: every other row closes.
    pub fn announce_gesture_start(&self, origin: RowId) {
        self.broadcast(CloseSignal {
            origin: Some(origin),
        });
    }

    /// Closes every row, no exemptions.
    pub fn close_all(&self) {
        self.broadcast(CloseSignal { origin: None });
    }

    /// Taps always close every row; scrolls only when the offset moved.
    pub fn observe_container_activity(&self, activity: ContainerActivity) {
        match activity {
            ContainerActivity::Tap => self.close_all(),
            ContainerActivity::ScrollOffsetChanged(offset) => {
                if !offset.is_finite() {
                    log::warn!("ignoring non-finite scroll offset {offset}");
                    return;
                }
                let moved = {
                    let mut inner = self.inner.borrow_mut();
                    let moved = inner.last_scroll_offset != offset;
                    inner.last_scroll_offset = offset;
                    moved
                };
                if moved {
                    self.close_all();
                }
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn broadcast(&self, signal: CloseSignal) {
        // Subscribers may subscribe, unsubscribe or broadcast again.
        let subscribers: Vec<Subscriber> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        match signal.origin {
            Some(origin) => log::debug!(
                "{origin} started a gesture; closing {} other rows",
                subscribers.len().saturating_sub(1)
            ),
            None => log::debug!("container activity; closing {} rows", subscribers.len()),
        }
        for subscriber in subscribers {
            subscriber(signal);
        }
    }
}

/// Keeps a row subscribed to its hub; dropping it unsubscribes.
pub struct HubSubscription {
    hub: Weak<RefCell<HubInner>>,
    id: Option<u64>,
}

impl HubSubscription {
    pub fn unsubscribe(mut self) {
        self.unsubscribe_in_place();
    }

    fn unsubscribe_in_place(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().subscribers.retain(|(entry, _)| *entry != id);
        }
    }
}

impl Drop for HubSubscription {
    fn drop(&mut self) {
        self.unsubscribe_in_place();
    }
}

#[cfg(test)]
#[path = "tests/hub_tests.rs"]
mod tests;
