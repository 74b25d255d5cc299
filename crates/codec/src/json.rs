//! JSON entry points (serde_json)
//!
//! Mirrors the `serde_json` top-level functions with an extra context
//! argument. Requires the `json` feature (enabled by default).

#![cfg(feature = "json")]

use crate::de::{ContextDeserialize, DeserializeWrapper};
use crate::ser::{ContextSerialize, SerializeWrapper};
use ctxcodec_core::slot;
use std::io;

/// Decode a `T` from a JSON string
pub fn from_str_with_context<T>(s: &str, context: T::Context) -> serde_json::Result<T>
where
    T: ContextDeserialize,
{
    slot::with_context(context, || serde_json::from_str::<DeserializeWrapper<T>>(s))
        .map(DeserializeWrapper::into_inner)
}

/// Decode a `T` from JSON bytes
pub fn from_slice_with_context<T>(v: &[u8], context: T::Context) -> serde_json::Result<T>
where
    T: ContextDeserialize,
{
    slot::with_context(context, || serde_json::from_slice::<DeserializeWrapper<T>>(v))
        .map(DeserializeWrapper::into_inner)
}

/// Decode a `T` from a JSON byte stream
pub fn from_reader_with_context<R, T>(rdr: R, context: T::Context) -> serde_json::Result<T>
where
    R: io::Read,
    T: ContextDeserialize,
{
    slot::with_context(context, || {
        serde_json::from_reader::<R, DeserializeWrapper<T>>(rdr)
    })
    .map(DeserializeWrapper::into_inner)
}

/// Decode a `T` from an in-memory JSON tree
pub fn from_value_with_context<T>(
    value: serde_json::Value,
    context: T::Context,
) -> serde_json::Result<T>
where
    T: ContextDeserialize,
{
    slot::with_context(context, || {
        serde_json::from_value::<DeserializeWrapper<T>>(value)
    })
    .map(DeserializeWrapper::into_inner)
}

pub fn to_string_with_context<T>(value: &T, context: &T::Context) -> serde_json::Result<String>
where
    T: ContextSerialize + ?Sized,
{
    serde_json::to_string(&SerializeWrapper::new(value, context))
}

pub fn to_string_pretty_with_context<T>(
    value: &T,
    context: &T::Context,
) -> serde_json::Result<String>
where
    T: ContextSerialize + ?Sized,
{
    serde_json::to_string_pretty(&SerializeWrapper::new(value, context))
}

pub fn to_vec_with_context<T>(value: &T, context: &T::Context) -> serde_json::Result<Vec<u8>>
where
    T: ContextSerialize + ?Sized,
{
    serde_json::to_vec(&SerializeWrapper::new(value, context))
}

pub fn to_writer_with_context<W, T>(
    writer: W,
    value: &T,
    context: &T::Context,
) -> serde_json::Result<()>
where
    W: io::Write,
    T: ContextSerialize + ?Sized,
{
    serde_json::to_writer(writer, &SerializeWrapper::new(value, context))
}

pub fn to_value_with_context<T>(
    value: &T,
    context: &T::Context,
) -> serde_json::Result<serde_json::Value>
where
    T: ContextSerialize + ?Sized,
{
    serde_json::to_value(SerializeWrapper::new(value, context))
}
