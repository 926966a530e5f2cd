//! Deferred task queue keyed on clock time.
//!
//! Tasks are kept in a min-heap ordered by `(due, id)`. Ids grow
//! monotonically, so tasks due at the same instant fire in the order they
//! were scheduled. Cancellation is lazy: cancelled ids are skipped when
//! they reach the front of the queue.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::clock::Millis;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Work the game defers to a later instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Periodic elapsed-time display update.
    Tick,
    /// Compare the two face-up cards after the flip delay.
    ResolveFlip,
}

/// A task popped from the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledTask {
    pub due: Millis,
    pub id: TaskId,
    pub task: Task,
}

/// Min-heap of pending tasks.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<ScheduledTask>>,
    cancelled: FxHashSet<TaskId>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire at `due`.
    pub fn schedule(&mut self, due: Millis, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse(ScheduledTask { due, id, task }));
        id
    }

    /// Cancel a pending task. Unknown or already fired ids are ignored.
    pub fn cancel(&mut self, id: TaskId) {
        if self.queue.iter().any(|Reverse(t)| t.id == id) {
            self.cancelled.insert(id);
        }
    }

    /// Pop the earliest live task due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<ScheduledTask> {
        while let Some(Reverse(head)) = self.queue.peek() {
            if head.due > now {
                return None;
            }
            let Reverse(task) = self.queue.pop()?;
            if !self.cancelled.remove(&task.id) {
                return Some(task);
            }
        }
        None
    }

    /// Due time of the earliest live task, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.queue
            .iter()
            .filter(|Reverse(t)| !self.cancelled.contains(&t.id))
            .map(|Reverse(t)| t.due)
            .min()
    }

    /// Due time of the earliest live task of one kind.
    #[must_use]
    pub fn next_due_of(&self, kind: Task) -> Option<Millis> {
        self.queue
            .iter()
            .filter(|Reverse(t)| t.task == kind && !self.cancelled.contains(&t.id))
            .map(|Reverse(t)| t.due)
            .min()
    }

    /// Number of live (not cancelled) tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len() - self.cancelled.len()
    }

    /// Number of live tasks of one kind.
    #[must_use]
    pub fn pending_of(&self, kind: Task) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(t)| t.task == kind && !self.cancelled.contains(&t.id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_due_order() {
        let mut sched = Scheduler::new();
        sched.schedule(300, Task::Tick);
        sched.schedule(100, Task::ResolveFlip);

        assert_eq!(sched.pop_due(50), None);

        let first = sched.pop_due(1000).unwrap();
        assert_eq!(first.due, 100);
        assert_eq!(first.task, Task::ResolveFlip);

        let second = sched.pop_due(1000).unwrap();
        assert_eq!(second.due, 300);
        assert_eq!(sched.pop_due(1000), None);
    }

    #[test]
    fn test_same_due_fires_in_schedule_order() {
        let mut sched = Scheduler::new();
        let a = sched.schedule(500, Task::Tick);
        let b = sched.schedule(500, Task::ResolveFlip);

        assert_eq!(sched.pop_due(500).unwrap().id, a);
        assert_eq!(sched.pop_due(500).unwrap().id, b);
    }

    #[test]
    fn test_cancel_skips_task() {
        let mut sched = Scheduler::new();
        let tick = sched.schedule(100, Task::Tick);
        sched.schedule(200, Task::ResolveFlip);

        sched.cancel(tick);
        assert_eq!(sched.pending(), 1);
        assert_eq!(sched.next_due(), Some(200));

        let fired = sched.pop_due(1000).unwrap();
        assert_eq!(fired.task, Task::ResolveFlip);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_cancel_unknown_is_noop() {
        let mut sched = Scheduler::new();
        let id = sched.schedule(10, Task::Tick);
        assert!(sched.pop_due(10).is_some());

        sched.cancel(id);
        sched.cancel(TaskId(99));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_pending_of_kind() {
        let mut sched = Scheduler::new();
        sched.schedule(10, Task::Tick);
        let flip = sched.schedule(20, Task::ResolveFlip);
        assert_eq!(sched.pending_of(Task::Tick), 1);
        assert_eq!(sched.pending_of(Task::ResolveFlip), 1);

        assert_eq!(sched.next_due_of(Task::ResolveFlip), Some(20));

        sched.cancel(flip);
        assert_eq!(sched.pending_of(Task::ResolveFlip), 0);
        assert_eq!(sched.next_due_of(Task::ResolveFlip), None);
    }
}
