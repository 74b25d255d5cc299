//! Binary entry points (bincode)
//!
//! bincode is not self-describing, so a context-aware type must read back
//! exactly what its `ContextSerialize` side wrote. Skipped optional fields
//! are not representable; use `Option` values instead. Requires the
//! `bincode` feature (enabled by default).

#![cfg(feature = "bincode")]

use crate::de::{ContextDeserialize, DeserializeWrapper};
use crate::ser::{ContextSerialize, SerializeWrapper};
use ctxcodec_core::slot;
use std::io;

/// Decode a `T` from bincode bytes
pub fn from_bytes_with_context<T>(bytes: &[u8], context: T::Context) -> bincode::Result<T>
where
    T: ContextDeserialize,
{
    slot::with_context(context, || bincode::deserialize::<DeserializeWrapper<T>>(bytes))
        .map(DeserializeWrapper::into_inner)
}

/// Decode a `T` from a bincode stream
pub fn from_reader_with_context<R, T>(reader: R, context: T::Context) -> bincode::Result<T>
where
    R: io::Read,
    T: ContextDeserialize,
{
    slot::with_context(context, || {
        bincode::deserialize_from::<R, DeserializeWrapper<T>>(reader)
    })
    .map(DeserializeWrapper::into_inner)
}

/// Encode `value` as bincode bytes
pub fn to_bytes_with_context<T>(value: &T, context: &T::Context) -> bincode::Result<Vec<u8>>
where
    T: ContextSerialize + ?Sized,
{
    bincode::serialize(&SerializeWrapper::new(value, context))
}

/// Encode `value` into a bincode stream
pub fn to_writer_with_context<W, T>(
    writer: W,
    value: &T,
    context: &T::Context,
) -> bincode::Result<()>
where
    W: io::Write,
    T: ContextSerialize + ?Sized,
{
    bincode::serialize_into(writer, &SerializeWrapper::new(value, context))
}
