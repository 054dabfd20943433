use super::*;
use crate::seconds_to_nanos;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn delayed_task_runs_once_after_deadline() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(Vec::new()));

    let task = {
        let fired = Rc::clone(&fired);
        handle.schedule_after(seconds_to_nanos(0.282), move || {
            fired.borrow_mut().push("commit");
        })
    };

    handle.advance_frame(seconds_to_nanos(0.25));
    assert!(fired.borrow().is_empty());
    assert!(task.is_pending());

    handle.advance_frame(seconds_to_nanos(0.3));
    assert_eq!(fired.borrow().as_slice(), &["commit"]);
    assert!(!task.is_pending());

    handle.advance_frame(seconds_to_nanos(1.0));
    assert_eq!(fired.borrow().len(), 1);
}

#[test]
fn dropping_task_handle_cancels_the_task() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(false));

    {
        let fired = Rc::clone(&fired);
        let task = handle.schedule_after(1_000, move || *fired.borrow_mut() = true);
        drop(task);
    }

    handle.advance_frame(10_000);
    assert!(!*fired.borrow());
    assert!(!handle.has_pending_work());
}

#[test]
fn due_tasks_run_in_deadline_order() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    let late = {
        let order = Rc::clone(&order);
        handle.schedule_after(300, move || order.borrow_mut().push(3))
    };
    let early = {
        let order = Rc::clone(&order);
        handle.schedule_after(100, move || order.borrow_mut().push(1))
    };
    let middle = {
        let order = Rc::clone(&order);
        handle.schedule_after(200, move || order.borrow_mut().push(2))
    };

    handle.advance_frame(1_000);
    assert_eq!(order.borrow().as_slice(), &[1, 2, 3]);
    drop((late, early, middle));
}

#[test]
fn frame_callbacks_registered_while_draining_wait_for_next_frame() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep = Rc::new(RefCell::new(Vec::new()));

    {
        let frames = Rc::clone(&frames);
        let keep_inner = Rc::clone(&keep);
        let clock = handle.frame_clock();
        let registration = clock.clone().with_frame_nanos(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            let next = clock.with_frame_nanos(move |time| frames.borrow_mut().push(time));
            keep_inner.borrow_mut().push(next);
        });
        keep.borrow_mut().push(registration);
    }

    handle.advance_frame(16);
    assert_eq!(frames.borrow().as_slice(), &[16]);
    handle.advance_frame(32);
    assert_eq!(frames.borrow().as_slice(), &[16, 32]);
}

#[test]
fn cancelled_registration_never_fires() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        handle
            .frame_clock()
            .with_frame_nanos(move |_| *fired.borrow_mut() = true)
    };
    registration.cancel();

    handle.advance_frame(16);
    assert!(!*fired.borrow());
}

#[test]
fn time_never_moves_backwards() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    handle.advance_frame(500);
    handle.advance_frame(100);
    assert_eq!(handle.now_nanos(), 500);
}

#[test]
fn row_ids_are_unique() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let first = handle.allocate_row_id();
    let second = handle.allocate_row_id();
    assert_ne!(first, second);
    assert_eq!(format!("{first}"), "row#1");
}
