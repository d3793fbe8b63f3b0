//! Virtual-clock timer queue. The host advances time; due tasks come out in deadline order
//! (ties in scheduling order).

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Lifetime a task is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Lives as long as the shell.
    Session,
    /// Cancelled when the terminal overlay closes.
    Overlay,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    scope: Scope,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, scope: Scope, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue
            .insert((self.now + delay, id.0), Entry { id, scope, task });
        id
    }

    /// Cancels every task of a scope and returns how many were dropped.
    pub fn cancel_scope(&mut self, scope: Scope) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, e| e.scope != scope);
        before - self.queue.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.queue.values().any(|e| e.id == id)
    }

    /// Pops the earliest task due at or before `until`, moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, T)> {
        let (&key, _) = self.queue.iter().next()?;
        if key.0 > until {
            return None;
        }
        let entry = self.queue.remove(&key)?;
        self.now = self.now.max(key.0);
        Some((entry.id, entry.task))
    }

    /// Moves the clock forward without running anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|k| k.0)
    }

    /// Whether any queued task satisfies `pred`.
    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.queue.values().any(|e| pred(&e.task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(300), Scope::Session, "c");
        s.schedule(ms(100), Scope::Session, "a");
        s.schedule(ms(100), Scope::Session, "b");
        let mut fired = Vec::new();
        while let Some((_, t)) = s.pop_due(ms(1000)) {
            fired.push((s.now(), t));
        }
        assert_eq!(fired, vec![(ms(100), "a"), (ms(100), "b"), (ms(300), "c")]);
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut s = Scheduler::new();
        s.schedule(ms(50), Scope::Session, ());
        assert!(s.pop_due(ms(49)).is_none());
        assert_eq!(s.now(), Duration::ZERO);
        assert!(s.pop_due(ms(50)).is_some());
    }

    #[test]
    fn delays_are_relative_to_now() {
        let mut s = Scheduler::new();
        s.set_now(ms(1000));
        s.schedule(ms(10), Scope::Session, ());
        assert_eq!(s.next_deadline(), Some(ms(1010)));
    }

    #[test]
    fn handle_stays_pending_until_popped() {
        let mut s = Scheduler::new();
        let a = s.schedule(ms(10), Scope::Session, 1);
        let b = s.schedule(ms(20), Scope::Overlay, 2);
        assert!(s.is_pending(a));
        assert_eq!(s.pop_due(ms(10)), Some((a, 1)));
        assert!(!s.is_pending(a));
        s.cancel_scope(Scope::Overlay);
        assert!(!s.is_pending(b));
    }

    #[test]
    fn cancel_scope_keeps_session_tasks() {
        let mut s = Scheduler::new();
        s.schedule(ms(10), Scope::Overlay, "focus");
        s.schedule(ms(10), Scope::Session, "prank");
        s.schedule(ms(20), Scope::Overlay, "scroll");
        assert_eq!(s.cancel_scope(Scope::Overlay), 2);
        assert!(s.any(|t| *t == "prank"));
        assert!(!s.any(|t| *t != "prank"));
    }
}
