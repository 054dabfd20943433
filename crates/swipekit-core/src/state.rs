//! Plain observable state cells.
//!
//! A [`MutableState`] is a value plus a list of observers. Every
//! `set_value` notifies the observers synchronously with the new value;
//! there is no implicit dependency tracking.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct StateCell<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<(u64, Observer<T>)>>,
    next_observer: Cell<u64>,
}

pub struct MutableState<T: 'static> {
    inner: Rc<StateCell<T>>,
}

impl<T: 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(value),
                observers: RefCell::new(Vec::new()),
                next_observer: Cell::new(1),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Stores `value` and notifies observers.
    ///
    /// Observers receive their own copy, so they may read or write this
    /// state again from inside the notification.
    pub fn set_value(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        notify(&self.inner, &value);
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, value) = {
            let mut borrow = self.inner.value.borrow_mut();
            let result = f(&mut borrow);
            (result, borrow.clone())
        };
        notify(&self.inner, &value);
        result
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> StateObserver {
        subscribe(&self.inner, Rc::new(observer))
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T: 'static> {
    inner: Rc<StateCell<T>>,
}

impl<T: 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> StateObserver {
        subscribe(&self.inner, Rc::new(observer))
    }
}

fn notify<T: 'static>(cell: &StateCell<T>, value: &T) {
    let observers: Vec<Observer<T>> = cell
        .observers
        .borrow()
        .iter()
        .map(|(_, observer)| Rc::clone(observer))
        .collect();
    for observer in observers {
        observer(value);
    }
}

fn subscribe<T: 'static>(cell: &Rc<StateCell<T>>, observer: Observer<T>) -> StateObserver {
    let id = cell.next_observer.get();
    cell.next_observer.set(id + 1);
    cell.observers.borrow_mut().push((id, observer));
    let weak: Weak<StateCell<T>> = Rc::downgrade(cell);
    StateObserver {
        unsubscribe: Some(Box::new(move || {
            if let Some(cell) = weak.upgrade() {
                cell.observers.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })),
    }
}

/// Subscription guard returned by `subscribe`; dropping it removes the observer.
pub struct StateObserver {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl StateObserver {
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for StateObserver {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
