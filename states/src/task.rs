//! Cancellation primitives for delayed work.
//!
//! A [`TaskHandle`] pairs a [`TaskId`] with a `CancellationToken` from
//! `tokio_util`. Tasks never get aborted forcibly; they cooperate by
//! selecting on `token.cancelled()` next to their actual work.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// Combines the `TypeId` of the compute that owns the task with a
/// generation counter, so a newer submission can tell a stale completion
/// apart from its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations belong to more recently spawned tasks.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task with cooperative cancellation.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Token to move into the async work that should observe cancellation.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Request cooperative cancellation. The task stops at its next
    /// cancellation check point; nothing is forcibly aborted.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_distinguishes_generations() {
        let type_id = TypeId::of::<String>();

        let id1 = TaskId::new(type_id, 1);
        let id2 = TaskId::new(type_id, 1);
        let id3 = TaskId::new(type_id, 2);
        let id4 = TaskId::new(TypeId::of::<i32>(), 1);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_ne!(id1, id4);
    }

    #[test]
    fn handle_cancel_is_observable() {
        let handle = TaskHandle::new(TaskId::new(TypeId::of::<String>(), 1), CancellationToken::new());

        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_select_never_runs_the_work() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let fired = Arc::new(AtomicBool::new(false));

        let fired_in_task = Arc::clone(&fired);
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(Duration::from_millis(20)) => {
                    fired_in_task.store(true, Ordering::SeqCst);
                }
            }
        });

        handle.cancel();
        task.await.expect("task panicked");

        assert!(!fired.load(Ordering::SeqCst), "cancelled work must not run");
    }

    #[test]
    fn cloned_handles_share_the_token() {
        let handle1 = TaskHandle::new(TaskId::new(TypeId::of::<String>(), 1), CancellationToken::new());
        let handle2 = handle1.clone();
        let token = handle1.cancellation_token();

        handle2.cancel();

        assert!(handle1.is_cancelled());
        assert!(token.is_cancelled());
    }
}
