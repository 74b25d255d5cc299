//! "Configuration" spelling of the context API
//!
//! Same mechanism, same slot, different vocabulary for code bases that call
//! the per-call parameter a configuration.
//!
//! Only the type and entry-point names change. The traits are the context
//! traits themselves, so implementors still write `type Context` and
//! `deserialize_with_context` / `serialize_with_context`.

pub use crate::de::{
    ContextDeserialize as ConfigurationDeserialize, ContextSeed as ConfigurationSeed,
    DeserializeWrapper, deserialize_with_context as deserialize_with_configuration,
};
pub use crate::ser::{
    ContextSerialize as ConfigurationSerialize, SerializeWrapper,
    serialize_with_context as serialize_with_configuration,
};
pub use crate::ContextCodable as ConfigurationCodable;

#[cfg(feature = "json")]
pub use crate::json::{
    from_reader_with_context as from_reader_with_configuration,
    from_slice_with_context as from_slice_with_configuration,
    from_str_with_context as from_str_with_configuration,
    from_value_with_context as from_value_with_configuration,
    to_string_pretty_with_context as to_string_pretty_with_configuration,
    to_string_with_context as to_string_with_configuration,
    to_value_with_context as to_value_with_configuration,
    to_vec_with_context as to_vec_with_configuration,
    to_writer_with_context as to_writer_with_configuration,
};

#[cfg(feature = "bincode")]
pub use crate::binary::{
    from_bytes_with_context as from_bytes_with_configuration,
    from_reader_with_context as from_binary_reader_with_configuration,
    to_bytes_with_context as to_bytes_with_configuration,
    to_writer_with_context as to_binary_writer_with_configuration,
};
