//! One-shot deferred actions
//!
//! Timers are deadlines the UI loop polls on every tick. Each schedule call
//! returns an id; cancelling an id that already fired or was never issued is
//! harmless.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<K> {
    id: TimerId,
    kind: K,
    /// `None` when the delay reaches past what `Instant` can represent
    deadline: Option<Instant>,
}

/// A set of pending one-shot timers
#[derive(Debug, Clone)]
pub struct Timers<K> {
    next_id: u64,
    pending: Vec<Pending<K>>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<K: Copy> Timers<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay` after `now`. A delay too large to
    /// represent never fires but can still be cancelled.
    pub fn schedule(&mut self, kind: K, delay: Duration, now: Instant) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Pending {
            id,
            kind,
            deadline: now.checked_add(delay),
        });
        id
    }

    /// Returns whether a pending timer was removed
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerId, K)> {
        let mut due: Vec<Pending<K>> = Vec::new();
        self.pending.retain(|p| {
            if p.deadline.is_some_and(|deadline| deadline <= now) {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.id.cmp(&b.id)));
        due.into_iter().map(|p| (p.id, p.kind)).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|p| p.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
