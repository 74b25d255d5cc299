//! Per-thread context slot
//!
//! Carries one context value from the code that knows it (the caller of a
//! decode) to the code that needs it (the value's own decode logic) when the
//! engine in between has no parameter for it.
//!
//! # Protocol
//!
//! ```text
//! caller thread
//!   write(ctx) ──► [ Some(ctx) ] ──► engine ──► adapter: consume() ──► [ None ]
//! ```
//!
//! - Each thread sees only its own slot. No locks, no cross-thread visibility.
//! - At most one value is pending. A second write replaces the first
//!   (the replaced value is dropped and counted as an overwrite).
//! - Reads always clear. There is no way to look at the pending value
//!   without taking it.
//! - A value still pending when the thread exits is dropped by the slot's
//!   thread-local destructor.
//!
//! A write must be followed by the engine call that consumes it, with no
//! other slot activity on the same thread in between. Nested consumers
//! re-write the slot for each child right before recursing into it.

use crate::boxed::ContextBox;
use crate::config::bridge_config;
use crate::error::ContextError;
use crate::stats::{bump, slot_stats};
use std::any::type_name;
use std::cell::Cell;

struct SlotCell {
    pending: Cell<Option<ContextBox>>,
}

impl Drop for SlotCell {
    fn drop(&mut self) {
        // No logging here: subscriber thread-locals may already be gone.
        if self.pending.take().is_some() {
            bump(&slot_stats().released_on_teardown);
        }
    }
}

thread_local! {
    /// The calling thread's pending context (if any)
    static SLOT: SlotCell = const {
        SlotCell {
            pending: Cell::new(None),
        }
    };
}

/// Exchange the pending box, returning the previous one
///
/// Returns `Err(value)` with the argument untouched if the slot is already
/// gone (thread teardown in progress).
fn exchange(value: Option<ContextBox>) -> Result<Option<ContextBox>, Option<ContextBox>> {
    let mut value = Some(value);
    SLOT.try_with(|slot| slot.pending.replace(value.take().flatten()))
        .map_err(|_| value.take().flatten())
}

/// Store a context value for the next consumer on this thread
pub fn write<C: 'static>(value: C) {
    write_boxed(ContextBox::new(value));
}

/// Store an already boxed context value
pub fn write_boxed(boxed: ContextBox) {
    let type_name = boxed.type_name();
    bump(&slot_stats().writes);

    match exchange(Some(boxed)) {
        Ok(Some(previous)) => {
            bump(&slot_stats().overwrites);
            if bridge_config().warn_on_overwrite {
                tracing::warn!(
                    "context slot: {} overwritten by {} before it was consumed",
                    previous.type_name(),
                    type_name
                );
            } else {
                tracing::debug!(
                    "context slot: {} overwritten by {} before it was consumed",
                    previous.type_name(),
                    type_name
                );
            }
        }
        Ok(None) => {
            tracing::trace!("context slot: wrote {}", type_name);
        }
        Err(_) => {
            // Thread teardown: no logging, as in `SlotCell::drop`.
            bump(&slot_stats().released_on_teardown);
        }
    }
}

/// Take (and clear) the pending box on this thread
pub fn consume_boxed() -> Option<ContextBox> {
    exchange(None).ok().flatten()
}

/// Take (and clear) the pending context as a `C`
///
/// The slot is empty afterwards whatever the outcome. A value of the wrong
/// type is dropped and reported, never reinterpreted.
pub fn consume<C: 'static>() -> Result<C, ContextError> {
    let expected = type_name::<C>();
    let Some(boxed) = consume_boxed() else {
        bump(&slot_stats().missing);
        tracing::trace!("context slot: empty, {} expected", expected);
        return Err(ContextError::MissingContext { expected });
    };

    match boxed.into_inner::<C>() {
        Ok(value) => {
            bump(&slot_stats().consumed);
            tracing::trace!("context slot: consumed {}", expected);
            Ok(value)
        }
        Err(other) => {
            bump(&slot_stats().mismatched);
            tracing::trace!(
                "context slot: {} expected, found {}",
                expected,
                other.type_name()
            );
            Err(ContextError::ContextTypeMismatch {
                expected,
                actual: other.type_name(),
            })
        }
    }
}

/// Clear whatever is pending on this thread
///
/// Returns true if a value was discarded.
pub fn drain() -> bool {
    match consume_boxed() {
        Some(stale) => {
            bump(&slot_stats().drained);
            tracing::debug!("context slot: drained unconsumed {}", stale.type_name());
            true
        }
        None => false,
    }
}

/// Check whether a value is pending on this thread
///
/// Presence only. The value itself stays unreachable except through
/// [`consume`], so this cannot be used to read a context twice. Meant for
/// tests and diagnostics.
#[doc(hidden)]
pub fn has_pending() -> bool {
    SLOT.try_with(|slot| {
        let boxed = slot.pending.take();
        let pending = boxed.is_some();
        slot.pending.set(boxed);
        pending
    })
    .unwrap_or(false)
}

/// Drains this thread's slot when dropped
///
/// Held across an engine call so the slot is empty when the call returns,
/// including when the engine never reached the consumer (absent value,
/// early error, panic).
#[must_use = "the guard drains the slot when dropped"]
pub struct DrainGuard {
    _private: (),
}

impl DrainGuard {
    pub fn new() -> Self {
        DrainGuard { _private: () }
    }
}

impl Default for DrainGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DrainGuard {
    fn drop(&mut self) {
        drain();
    }
}

/// Write a context and run `call` with a drain guard held
///
/// The write is the last thing that happens before `call` runs.
pub fn with_context<C: 'static, R>(value: C, call: impl FnOnce() -> R) -> R {
    let _guard = DrainGuard::new();
    write(value);
    call()
}
