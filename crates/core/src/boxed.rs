//! Ownership Box for pending context values
//!
//! A `ContextBox` is the unit that moves into the slot on write and back out
//! on consume. It erases the concrete type so one slot can carry any context,
//! and remembers the type name for diagnostics.
//!
//! Ownership is linear: the box is created by the writer, moved into the
//! slot, and moved out by exactly one consumer (or dropped by the slot's
//! teardown). There is no way to borrow the pending value in place.

use std::any::{Any, type_name};

/// Type-erased, owned context value
pub struct ContextBox {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl ContextBox {
    /// Box a context value
    pub fn new<C: 'static>(value: C) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<C>(),
        }
    }

    /// Name of the boxed value's concrete type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the boxed value is a `C`
    pub fn is<C: 'static>(&self) -> bool {
        self.value.is::<C>()
    }

    /// Take the value back out as a `C`
    ///
    /// On a type mismatch the box is handed back unchanged so the caller
    /// decides what happens to it.
    pub fn into_inner<C: 'static>(self) -> Result<C, ContextBox> {
        let type_name = self.type_name;
        match self.value.downcast::<C>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(ContextBox { value, type_name }),
        }
    }
}

impl std::fmt::Debug for ContextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextBox")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
