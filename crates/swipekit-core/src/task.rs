use crate::runtime::RuntimeHandle;

pub type TaskId = u64;

/// Cancellation handle for a task created by [`RuntimeHandle::schedule_after`].
///
/// The task is discarded when the handle is cancelled or dropped, so owners
/// keep the handle for as long as the deferred work is still wanted.
pub struct TaskHandle {
    runtime: RuntimeHandle,
    id: Option<TaskId>,
}

impl TaskHandle {
    pub(crate) fn new(runtime: RuntimeHandle, id: TaskId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Whether the task is still waiting to run.
    pub fn is_pending(&self) -> bool {
        self.id
            .map(|id| self.runtime.is_task_pending(id))
            .unwrap_or(false)
    }

    pub fn cancel(mut self) {
        self.cancel_in_place();
    }

    fn cancel_in_place(&mut self) {
        if let Some(id) = self.id.take() {
            if self.runtime.cancel_task(id) {
                log::trace!("cancelled delayed task {id}");
            }
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel_in_place();
    }
}
