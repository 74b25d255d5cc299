//! Context-aware serialization
//!
//! `Serialize::serialize` already receives `&self`, so the encode side needs
//! no slot: [`SerializeWrapper`] borrows the value together with its context
//! and hands both to [`ContextSerialize`] when the engine calls it.

use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// A type that writes itself to a serializer using a caller-supplied context
pub trait ContextSerialize {
    type Context: ?Sized;

    fn serialize_with_context<S>(
        &self,
        serializer: S,
        context: &Self::Context,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer;
}

/// Plain `Serialize` adapter pairing a value with its context
pub struct SerializeWrapper<'a, T: ContextSerialize + ?Sized> {
    value: &'a T,
    context: &'a T::Context,
}

impl<'a, T: ContextSerialize + ?Sized> SerializeWrapper<'a, T> {
    pub fn new(value: &'a T, context: &'a T::Context) -> Self {
        SerializeWrapper { value, context }
    }

    pub fn value(&self) -> &'a T {
        self.value
    }

    pub fn context(&self) -> &'a T::Context {
        self.context
    }
}

impl<T: ContextSerialize + ?Sized> Serialize for SerializeWrapper<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize_with_context(serializer, self.context)
    }
}

/// Encode `value` with any serializer
pub fn serialize_with_context<T, S>(
    value: &T,
    serializer: S,
    context: &T::Context,
) -> Result<S::Ok, S::Error>
where
    T: ContextSerialize + ?Sized,
    S: Serializer,
{
    SerializeWrapper::new(value, context).serialize(serializer)
}

/// Context-aware elements for sequences
pub trait SerializeSeqExt: SerializeSeq {
    fn serialize_element_with_context<T>(
        &mut self,
        value: &T,
        context: &T::Context,
    ) -> Result<(), Self::Error>
    where
        T: ContextSerialize + ?Sized,
    {
        self.serialize_element(&SerializeWrapper::new(value, context))
    }
}

impl<S: SerializeSeq> SerializeSeqExt for S {}

/// Context-aware fields for structs
pub trait SerializeStructExt: SerializeStruct {
    fn serialize_field_with_context<T>(
        &mut self,
        key: &'static str,
        value: &T,
        context: &T::Context,
    ) -> Result<(), Self::Error>
    where
        T: ContextSerialize + ?Sized,
    {
        self.serialize_field(key, &SerializeWrapper::new(value, context))
    }

    /// Writes the field only when `value` is present; otherwise the field is
    /// skipped
    fn serialize_field_if_present_with_context<T>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
        context: &T::Context,
    ) -> Result<(), Self::Error>
    where
        T: ContextSerialize + ?Sized,
    {
        match value {
            Some(value) => self.serialize_field_with_context(key, value, context),
            None => self.skip_field(key),
        }
    }
}

impl<S: SerializeStruct> SerializeStructExt for S {}

/// Context-aware values for maps
pub trait SerializeMapExt: SerializeMap {
    fn serialize_value_with_context<V>(
        &mut self,
        value: &V,
        context: &V::Context,
    ) -> Result<(), Self::Error>
    where
        V: ContextSerialize + ?Sized,
    {
        self.serialize_value(&SerializeWrapper::new(value, context))
    }

    fn serialize_entry_with_context<K, V>(
        &mut self,
        key: &K,
        value: &V,
        context: &V::Context,
    ) -> Result<(), Self::Error>
    where
        K: Serialize + ?Sized,
        V: ContextSerialize + ?Sized,
    {
        self.serialize_entry(key, &SerializeWrapper::new(value, context))
    }

    /// Writes the entry only when `value` is present
    fn serialize_entry_if_present_with_context<K, V>(
        &mut self,
        key: &K,
        value: Option<&V>,
        context: &V::Context,
    ) -> Result<(), Self::Error>
    where
        K: Serialize + ?Sized,
        V: ContextSerialize + ?Sized,
    {
        match value {
            Some(value) => self.serialize_entry_with_context(key, value, context),
            None => Ok(()),
        }
    }
}

impl<S: SerializeMap> SerializeMapExt for S {}
