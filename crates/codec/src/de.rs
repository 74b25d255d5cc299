//! Context-aware deserialization
//!
//! `serde::Deserialize` has no parameter for caller data. A type that needs
//! one implements [`ContextDeserialize`] instead, and the entry points here
//! route the context to it:
//!
//! ```text
//! next_value_with_context(ctx)
//!   ├─ slot::write(ctx)
//!   ├─ MapAccess::next_value::<DeserializeWrapper<T>>()
//!   │     └─ DeserializeWrapper::deserialize
//!   │           ├─ slot::consume::<T::Context>()
//!   │           └─ T::deserialize_with_context(deserializer, ctx)
//!   └─ slot drained on return
//! ```
//!
//! Code that drives serde by hand can skip the slot entirely and use
//! [`ContextSeed`] with `next_value_seed` / `next_element_seed`.

use ctxcodec_core::slot;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess};
use serde::Deserialize;
use std::any::type_name;
use std::marker::PhantomData;

/// A type that builds itself from a deserializer plus a caller-supplied context
///
/// The context never appears in the document. It is handed in by whoever
/// starts the decode (see [`deserialize_with_context`] and the container
/// extensions below).
pub trait ContextDeserialize: Sized {
    type Context: 'static;

    fn deserialize_with_context<'de, D>(
        deserializer: D,
        context: Self::Context,
    ) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

/// Plain `Deserialize` adapter that takes its context from the thread's slot
///
/// Every call consumes the slot, success or failure. An empty slot is a
/// `MissingContext` error and a wrongly typed value a `ContextTypeMismatch`,
/// both raised through the engine's own error type.
#[derive(Debug, Clone, PartialEq)]
pub struct DeserializeWrapper<T>(pub T);

impl<T: ContextDeserialize> DeserializeWrapper<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Park a context for the next `DeserializeWrapper<T>` on this thread
    pub fn set_context(context: T::Context) {
        slot::write(context);
    }
}

impl<'de, T: ContextDeserialize> Deserialize<'de> for DeserializeWrapper<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let context = slot::consume::<T::Context>().map_err(|e| {
            tracing::debug!("cannot decode {}: {}", type_name::<T>(), e);
            de::Error::custom(e)
        })?;
        T::deserialize_with_context(deserializer, context).map(DeserializeWrapper)
    }
}

/// `DeserializeSeed` carrying the context as an ordinary value
pub struct ContextSeed<T: ContextDeserialize> {
    context: T::Context,
    marker: PhantomData<fn() -> T>,
}

impl<T: ContextDeserialize> ContextSeed<T> {
    pub fn new(context: T::Context) -> Self {
        ContextSeed {
            context,
            marker: PhantomData,
        }
    }
}

impl<'de, T: ContextDeserialize> DeserializeSeed<'de> for ContextSeed<T> {
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize_with_context(deserializer, self.context)
    }
}

/// Decode a `T` from any deserializer, routing `context` through the slot
pub fn deserialize_with_context<'de, T, D>(
    deserializer: D,
    context: T::Context,
) -> Result<T, D::Error>
where
    T: ContextDeserialize,
    D: Deserializer<'de>,
{
    slot::with_context(context, || DeserializeWrapper::<T>::deserialize(deserializer))
        .map(DeserializeWrapper::into_inner)
}

/// Context-aware element decoding for sequences
pub trait SeqAccessExt<'de>: SeqAccess<'de> {
    /// Decode the next element with `context`
    ///
    /// Returns `Ok(None)` at the end of the sequence. The context is drained
    /// either way.
    fn next_element_with_context<T>(
        &mut self,
        context: T::Context,
    ) -> Result<Option<T>, Self::Error>
    where
        T: ContextDeserialize,
    {
        slot::with_context(context, || self.next_element::<DeserializeWrapper<T>>())
            .map(|value| value.map(DeserializeWrapper::into_inner))
    }
}

impl<'de, A> SeqAccessExt<'de> for A where A: SeqAccess<'de> {}

/// Context-aware value decoding for keyed containers
pub trait MapAccessExt<'de>: MapAccess<'de> {
    /// Decode the value for the key just read, with `context`
    fn next_value_with_context<T>(&mut self, context: T::Context) -> Result<T, Self::Error>
    where
        T: ContextDeserialize,
    {
        slot::with_context(context, || self.next_value::<DeserializeWrapper<T>>())
            .map(DeserializeWrapper::into_inner)
    }

    /// Like [`next_value_with_context`](Self::next_value_with_context) but an
    /// absent (null) value yields `Ok(None)`
    ///
    /// An absent value never reaches `T`, and the context is drained anyway:
    /// nothing written for this field survives the call.
    fn next_value_if_present_with_context<T>(
        &mut self,
        context: T::Context,
    ) -> Result<Option<T>, Self::Error>
    where
        T: ContextDeserialize,
    {
        slot::with_context(context, || {
            self.next_value::<Option<DeserializeWrapper<T>>>()
        })
        .map(|value| value.map(DeserializeWrapper::into_inner))
    }

    /// Decode the next key and its context-aware value
    ///
    /// The context is written only once the key has been read.
    fn next_entry_with_context<K, V>(
        &mut self,
        context: V::Context,
    ) -> Result<Option<(K, V)>, Self::Error>
    where
        K: Deserialize<'de>,
        V: ContextDeserialize,
    {
        let Some(key) = self.next_key::<K>()? else {
            return Ok(None);
        };
        let value = self.next_value_with_context(context)?;
        Ok(Some((key, value)))
    }
}

impl<'de, A> MapAccessExt<'de> for A where A: MapAccess<'de> {}
