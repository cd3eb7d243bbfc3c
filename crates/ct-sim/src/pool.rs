//! `ResourcePool` — bounded-capacity resource with a FIFO waiting line.
//!
//! # Invariants
//!
//! - `0 ≤ active ≤ capacity` at all times.
//! - Nobody waits while a unit is free: a release hands its unit straight to
//!   the head of the waiting line instead of returning it to the pool, so
//!   `waiting` is non-empty only when `active == capacity`.
//! - Waiters are granted strictly in the order they queued.
//!
//! [`occupancy`][ResourcePool::occupancy] is a plain read.  It never joins
//! the waiting line, so a caller that polls it can see a free unit ahead of
//! processes already queued for one.

use std::collections::VecDeque;

use ct_core::ProcessId;

use crate::{SimError, SimResult};

#[derive(Debug, Clone)]
pub struct ResourcePool {
    name:     &'static str,
    capacity: u32,
    active:   u32,
    waiting:  VecDeque<ProcessId>,
    /// Total units granted since creation (immediate and handed over).
    grants:   u64,
}

impl ResourcePool {
    pub fn new(name: &'static str, capacity: u32) -> SimResult<Self> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity { pool: name });
        }
        Ok(Self {
            name,
            capacity,
            active: 0,
            waiting: VecDeque::new(),
            grants: 0,
        })
    }

    /// Take a unit if one is free.  Returns `false` when the caller must queue.
    pub fn try_acquire(&mut self) -> bool {
        if self.active < self.capacity {
            debug_assert!(self.waiting.is_empty(), "{}: free unit while processes wait", self.name);
            self.active += 1;
            self.grants += 1;
            true
        } else {
            false
        }
    }

    /// Append `process` to the tail of the waiting line.
    pub fn enqueue(&mut self, process: ProcessId) {
        debug_assert_eq!(self.active, self.capacity, "{}: queued with a free unit", self.name);
        self.waiting.push_back(process);
    }

    /// Give back one unit.
    ///
    /// If a process is waiting, the unit passes directly to it and its id is
    /// returned so the caller can wake it; `active` is unchanged in that case.
    pub fn release(&mut self) -> SimResult<Option<ProcessId>> {
        if self.active == 0 {
            return Err(SimError::ReleaseUnheld { pool: self.name });
        }
        match self.waiting.pop_front() {
            Some(next) => {
                self.grants += 1;
                Ok(Some(next))
            }
            None => {
                self.active -= 1;
                Ok(None)
            }
        }
    }

    /// Units currently held.  Never blocks and never queues.
    #[inline]
    pub fn occupancy(&self) -> u32 {
        debug_assert!(self.active <= self.capacity, "{}: over capacity", self.name);
        self.active
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.active >= self.capacity
    }

    /// Processes currently queued, head first.
    pub fn waiting(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.waiting.iter().copied()
    }

    #[inline]
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    #[inline]
    pub fn grants(&self) -> u64 {
        self.grants
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}
