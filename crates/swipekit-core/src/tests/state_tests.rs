use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn set_value_notifies_observers() {
    let state = MutableState::new(0.0f32);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _observer = {
        let seen = Rc::clone(&seen);
        state.subscribe(move |value| seen.borrow_mut().push(*value))
    };

    state.set_value(12.5);
    state.update(|value| *value += 1.0);

    assert_eq!(seen.borrow().as_slice(), &[12.5, 13.5]);
    assert_eq!(state.get(), 13.5);
}

#[test]
fn dropped_observer_stops_receiving_updates() {
    let state = MutableState::new(1u32);
    let count = Rc::new(RefCell::new(0));
    let observer = {
        let count = Rc::clone(&count);
        state.as_state().subscribe(move |_| *count.borrow_mut() += 1)
    };

    state.set_value(2);
    drop(observer);
    state.set_value(3);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn observer_may_write_state_reentrantly() {
    let state = MutableState::new(0i32);
    let _observer = {
        let writer = state.clone();
        state.subscribe(move |value| {
            if *value < 0 {
                writer.set_value(0);
            }
        })
    };

    state.set_value(-4);
    assert_eq!(state.get(), 0);
}
