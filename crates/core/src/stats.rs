//! Process-wide slot activity counters
//!
//! Every thread owns its own slot, but diagnostics want one picture of how
//! the bridge is being used. Each slot operation bumps a shared counter with
//! a single relaxed atomic add. Only counts are recorded; context values
//! never leave their thread.
//!
//! A healthy program keeps `writes == consumed + mismatched + drained +
//! overwrites + released_on_teardown` (up to in-flight writes).

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counters, one field per slot event
#[derive(Debug)]
pub struct SlotStats {
    pub writes: AtomicU64,
    /// Writes that replaced a value nobody consumed
    pub overwrites: AtomicU64,
    /// Consumes that handed a correctly typed value to the consumer
    pub consumed: AtomicU64,
    /// Consumes that found the slot empty
    pub missing: AtomicU64,
    /// Consumes that found a value of the wrong type
    pub mismatched: AtomicU64,
    /// Stale values cleared by an overlay whose adapter never ran
    pub drained: AtomicU64,
    /// Values still pending when their thread exited
    pub released_on_teardown: AtomicU64,
}

impl SlotStats {
    const fn new() -> Self {
        Self {
            writes: AtomicU64::new(0),
            overwrites: AtomicU64::new(0),
            consumed: AtomicU64::new(0),
            missing: AtomicU64::new(0),
            mismatched: AtomicU64::new(0),
            drained: AtomicU64::new(0),
            released_on_teardown: AtomicU64::new(0),
        }
    }

    /// Copy the current counter values
    pub fn snapshot(&self) -> SlotStatsSnapshot {
        SlotStatsSnapshot {
            writes: self.writes.load(Ordering::Relaxed),
            overwrites: self.overwrites.load(Ordering::Relaxed),
            consumed: self.consumed.load(Ordering::Relaxed),
            missing: self.missing.load(Ordering::Relaxed),
            mismatched: self.mismatched.load(Ordering::Relaxed),
            drained: self.drained.load(Ordering::Relaxed),
            released_on_teardown: self.released_on_teardown.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`SlotStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotStatsSnapshot {
    pub writes: u64,
    pub overwrites: u64,
    pub consumed: u64,
    pub missing: u64,
    pub mismatched: u64,
    pub drained: u64,
    pub released_on_teardown: u64,
}

impl SlotStatsSnapshot {
    /// Counter deltas since an earlier snapshot
    pub fn since(&self, earlier: &SlotStatsSnapshot) -> SlotStatsSnapshot {
        SlotStatsSnapshot {
            writes: self.writes.saturating_sub(earlier.writes),
            overwrites: self.overwrites.saturating_sub(earlier.overwrites),
            consumed: self.consumed.saturating_sub(earlier.consumed),
            missing: self.missing.saturating_sub(earlier.missing),
            mismatched: self.mismatched.saturating_sub(earlier.mismatched),
            drained: self.drained.saturating_sub(earlier.drained),
            released_on_teardown: self
                .released_on_teardown
                .saturating_sub(earlier.released_on_teardown),
        }
    }

    /// Values written but not yet accounted for by any exit path
    pub fn in_flight(&self) -> u64 {
        self.writes.saturating_sub(
            self.consumed
                + self.mismatched
                + self.drained
                + self.overwrites
                + self.released_on_teardown,
        )
    }
}

static SLOT_STATS: SlotStats = SlotStats::new();

/// Get the global slot statistics
pub fn slot_stats() -> &'static SlotStats {
    &SLOT_STATS
}

#[inline]
pub(crate) fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}
