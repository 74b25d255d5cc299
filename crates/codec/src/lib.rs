//! ctxcodec: per-call context for serde
//!
//! serde's `Deserialize` and `Serialize` have fixed signatures. This crate
//! lets a type receive an extra caller-supplied value (a locale, a schema
//! version, a base offset) while serde drives it, including when the type
//! is nested inside other types and when unrelated decodes run on other
//! threads at the same time.
//!
//! - Decode: implement [`ContextDeserialize`]; call
//!   [`from_str_with_context`] at the top level, or
//!   [`SeqAccessExt::next_element_with_context`] /
//!   [`MapAccessExt::next_value_with_context`] from inside a visitor.
//! - Encode: implement [`ContextSerialize`]; call
//!   [`to_string_with_context`] or the `Serialize*Ext` container methods.
//!
//! # Modules
//!
//! - `de`: decode contract, slot-backed adapter, seed, container extensions
//! - `ser`: encode contract, wrapper, container extensions
//! - `json`: serde_json entry points (feature `json`)
//! - `binary`: bincode entry points (feature `bincode`)
//! - `configuration`: the same API under "configuration" names
//!
//! The context slot itself (and its counters and report) is re-exported
//! from `ctxcodec-core` as [`slot`].

pub mod binary;
pub mod configuration;
pub mod de;
pub mod json;
pub mod ser;

pub use ctxcodec_core::{ContextError, SlotStatsSnapshot, emit_report, slot, slot_stats};

pub use de::{
    ContextDeserialize, ContextSeed, DeserializeWrapper, MapAccessExt, SeqAccessExt,
    deserialize_with_context,
};
pub use ser::{
    ContextSerialize, SerializeMapExt, SerializeSeqExt, SerializeStructExt, SerializeWrapper,
    serialize_with_context,
};

#[cfg(feature = "json")]
pub use json::{
    from_reader_with_context, from_slice_with_context, from_str_with_context,
    from_value_with_context, to_string_pretty_with_context, to_string_with_context,
    to_value_with_context, to_vec_with_context, to_writer_with_context,
};

#[cfg(feature = "bincode")]
pub use binary::{from_bytes_with_context, to_bytes_with_context};

/// Types that both decode and encode with a context
pub trait ContextCodable: ContextDeserialize + ContextSerialize {}

impl<T: ContextDeserialize + ContextSerialize> ContextCodable for T {}
