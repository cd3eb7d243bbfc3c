//! `EventQueue` — time-ordered queue of pending process resumptions.
//!
//! Events are bucketed by wake tick in a `BTreeMap<Tick, VecDeque<_>>`.
//! Within a bucket they keep submission order, so two resumptions due at
//! the same tick always run first-in first-out, and an event submitted for
//! the tick currently being dispatched runs after everything already queued
//! for it.
//!
//! `BTreeMap` gives O(log W) insert and pop where W = number of distinct
//! wake ticks currently enqueued.  A terminal has a handful of processes
//! sleeping at any moment, so W stays small.

use std::collections::{BTreeMap, VecDeque};

use ct_core::{ProcessId, Tick};

/// One queued resumption.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PendingEvent {
    /// When the process should resume.
    pub at:      Tick,
    /// Global submission counter; strictly increasing across the run.
    pub seq:     u64,
    pub process: ProcessId,
}

#[derive(Default)]
pub struct EventQueue {
    inner:    BTreeMap<Tick, VecDeque<(u64, ProcessId)>>,
    next_seq: u64,
    /// Cached entry count for O(1) `len()`.
    total:    usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `process` to resume at `at`.  Returns the submission number.
    pub fn push(&mut self, at: Tick, process: ProcessId) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.entry(at).or_default().push_back((seq, process));
        self.total += 1;
        seq
    }

    /// Remove and return the earliest event, provided it is due at or
    /// before `limit`.
    pub fn pop_due(&mut self, limit: Tick) -> Option<PendingEvent> {
        let mut bucket = self.inner.first_entry()?;
        let at = *bucket.key();
        if at > limit {
            return None;
        }
        let (seq, process) = bucket.get_mut().pop_front()?;
        if bucket.get().is_empty() {
            bucket.remove();
        }
        self.total -= 1;
        Some(PendingEvent { at, seq, process })
    }

    /// Drop the event submitted as `seq` for tick `at`.  Returns `false` if
    /// no such event is queued.
    pub fn cancel(&mut self, at: Tick, seq: u64) -> bool {
        let Some(bucket) = self.inner.get_mut(&at) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|&(s, _)| s == seq) else {
            return false;
        };
        bucket.remove(pos);
        if bucket.is_empty() {
            self.inner.remove(&at);
        }
        self.total -= 1;
        true
    }

    /// The earliest tick with at least one queued event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued events across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one queued event.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }

    /// How many events have ever been pushed.
    pub fn submitted(&self) -> u64 {
        self.next_seq
    }
}
