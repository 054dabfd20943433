use crate::collections::map::HashSet;
use crate::collections::new_set;
use crate::frame_clock::FrameClock;
use crate::task::{TaskHandle, TaskId};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub type FrameCallbackId = u64;

/// Identity of one swipeable row, unique for the lifetime of its runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Box<dyn FnMut(u64)>,
}

struct DelayedTask {
    id: TaskId,
    deadline_nanos: u64,
    callback: Box<dyn FnOnce()>,
}

pub(crate) struct RuntimeInner {
    now_nanos: Cell<u64>,
    next_callback_id: Cell<u64>,
    next_row_id: Cell<u64>,
    frame_callbacks: RefCell<Vec<FrameCallbackEntry>>,
    /// Ids cancelled while their callback was already taken out for draining.
    cancelled_in_drain: RefCell<HashSet<FrameCallbackId>>,
    tasks: RefCell<Vec<DelayedTask>>,
}

/// Owner of the single-threaded swipe runtime.
///
/// All gesture updates, animations and broadcasts execute on the thread that
/// owns the runtime. Time only moves when the host calls
/// [`RuntimeHandle::advance_frame`], which makes every sequence in tests
/// fully deterministic.
pub struct Runtime {
    handle: RuntimeHandle,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        let inner = RuntimeInner {
            now_nanos: Cell::new(0),
            next_callback_id: Cell::new(1),
            next_row_id: Cell::new(1),
            frame_callbacks: RefCell::new(Vec::new()),
            cancelled_in_drain: RefCell::new(new_set()),
            tasks: RefCell::new(Vec::new()),
        };
        Self {
            handle: RuntimeHandle(Rc::new(inner)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }
}

/// Cheap, clonable reference to a [`Runtime`].
#[derive(Clone)]
pub struct RuntimeHandle(Rc<RuntimeInner>);

impl RuntimeHandle {
    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    /// Current virtual time in nanoseconds.
    pub fn now_nanos(&self) -> u64 {
        self.0.now_nanos.get()
    }

    pub fn allocate_row_id(&self) -> RowId {
        let id = self.0.next_row_id.get();
        self.0.next_row_id.set(id + 1);
        RowId(id)
    }

    fn next_id(&self) -> u64 {
        let id = self.0.next_callback_id.get();
        self.0.next_callback_id.set(id + 1);
        id
    }

    pub fn register_frame_callback(&self, callback: impl FnMut(u64) + 'static) -> FrameCallbackId {
        let id = self.next_id();
        self.0.frame_callbacks.borrow_mut().push(FrameCallbackEntry {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.0.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        } else {
            self.0.cancelled_in_drain.borrow_mut().insert(id);
        }
    }

    /// Schedules `callback` to run once `delay_nanos` of virtual time has
    /// elapsed. Dropping or cancelling the returned handle discards it.
    pub fn schedule_after(&self, delay_nanos: u64, callback: impl FnOnce() + 'static) -> TaskHandle {
        let id = self.next_id();
        let deadline_nanos = self.now_nanos().saturating_add(delay_nanos);
        self.0.tasks.borrow_mut().push(DelayedTask {
            id,
            deadline_nanos,
            callback: Box::new(callback),
        });
        TaskHandle::new(self.clone(), id)
    }

    pub(crate) fn cancel_task(&self, id: TaskId) -> bool {
        let mut tasks = self.0.tasks.borrow_mut();
        match tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_task_pending(&self, id: TaskId) -> bool {
        self.0.tasks.borrow().iter().any(|task| task.id == id)
    }

    /// Whether any frame callback or delayed task is still waiting.
    pub fn has_pending_work(&self) -> bool {
        !self.0.frame_callbacks.borrow().is_empty() || !self.0.tasks.borrow().is_empty()
    }

    /// Advances virtual time to `frame_time_nanos`, runs every delayed task
    /// that became due, then drains the frame callbacks.
    ///
    /// Time never moves backwards; an older timestamp is treated as "now".
    pub fn advance_frame(&self, frame_time_nanos: u64) {
        let now = frame_time_nanos.max(self.now_nanos());
        self.0.now_nanos.set(now);
        self.run_due_tasks();
        self.drain_frame_callbacks(now);
    }

    fn run_due_tasks(&self) {
        let now = self.now_nanos();
        loop {
            let next = {
                let mut tasks = self.0.tasks.borrow_mut();
                let due = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.deadline_nanos <= now)
                    .min_by_key(|(_, task)| (task.deadline_nanos, task.id))
                    .map(|(index, _)| index);
                due.map(|index| tasks.remove(index))
            };
            match next {
                Some(task) => {
                    log::trace!("running delayed task {}", task.id);
                    (task.callback)();
                }
                None => break,
            }
        }
    }

    /// Runs the callbacks registered before this call. Callbacks registered
    /// while draining wait for the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let batch: SmallVec<[FrameCallbackEntry; 8]> =
            self.0.frame_callbacks.borrow_mut().drain(..).collect();
        for mut entry in batch {
            if self.0.cancelled_in_drain.borrow_mut().remove(&entry.id) {
                continue;
            }
            (entry.callback)(frame_time_nanos);
        }
        self.0.cancelled_in_drain.borrow_mut().clear();
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
