// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred settle passes.
//!
//! Some viewport operations update immediately and then need exactly one more
//! update once the host has finished its own layout. Those follow-up passes
//! are queued here and drained by the host on its next tick. Queued passes
//! are never cancelled: a later mutation just makes them recompute the newer
//! state. A reason that is already pending is not queued again, since one
//! pass recomputes the latest state regardless of how many mutations
//! requested it.

use alloc::collections::VecDeque;

/// Why a settle pass was queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettleReason {
    /// The map was just constructed.
    Initial,
    /// The zoom was set to a value.
    ZoomTo,
    /// The view was reset.
    Reset,
    /// The view was fitted to bounds.
    FitBounds,
    /// The view center was set directly.
    SetView,
    /// The canvas was resized.
    Resize,
}

/// FIFO of pending settle passes.
#[derive(Clone, Debug, Default)]
pub struct SettleQueue {
    pending: VecDeque<SettleReason>,
    drained: u64,
}

impl SettleQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one pass unless a pass for `reason` is already pending.
    ///
    /// Returns `true` if a pass was queued.
    pub fn schedule(&mut self, reason: SettleReason) -> bool {
        if self.pending.contains(&reason) {
            return false;
        }
        self.pending.push_back(reason);
        true
    }

    /// Removes the oldest pending pass.
    pub fn pop(&mut self) -> Option<SettleReason> {
        let reason = self.pending.pop_front()?;
        self.drained += 1;
        Some(reason)
    }

    /// Number of pending passes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no pass is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending passes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = SettleReason> + '_ {
        self.pending.iter().copied()
    }

    /// Total passes popped over the queue's lifetime.
    #[must_use]
    pub fn drained(&self) -> u64 {
        self.drained
    }
}
