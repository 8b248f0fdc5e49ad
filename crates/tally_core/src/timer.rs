//! Deterministic deadline queue.
//!
//! Delayed transitions (error auto-clear, press highlight release) are
//! stored here instead of being slept on. The owner polls with the current
//! time and receives every action whose deadline has passed. Tests pass
//! synthetic instants, so nothing ever waits on a real clock.

use std::time::Instant;

/// Handle to a scheduled action, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<A> {
    deadline: Instant,
    id: TimerId,
    action: A,
}

/// Actions ordered by deadline.
///
/// Entries with equal deadlines fire in scheduling order.
#[derive(Debug, Clone)]
pub struct Timeline<A> {
    /// Sorted by `(deadline, id)`.
    entries: Vec<Entry<A>>,
    next_id: u64,
}

impl<A> Timeline<A> {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `action` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let index = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(index, Entry { deadline, id, action });
        id
    }

    /// Cancels a scheduled action. Returns it if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<A> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).action)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns every action due at or before `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<A> {
        let split = self.entries.partition_point(|e| e.deadline <= now);
        self.entries.drain(..split).map(|e| e.action).collect()
    }

    /// Returns true if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}
