//! ctxcodec core: a per-thread side channel for decode/encode parameters
//!
//! Some value types need a caller-supplied parameter (a locale, a schema
//! version, a default) at the moment their own decode logic runs. When the
//! engine driving the decode has a fixed entry point with no room for that
//! parameter, the caller parks it in this thread's slot and the value's
//! adapter takes it back out.
//!
//! This crate knows nothing about any particular engine. The serde binding
//! lives in `ctxcodec`.
//!
//! # Modules
//!
//! - `boxed`: Type-erased owned holder for a pending context
//! - `slot`: Thread-local single-value slot (write, one-shot consume, drain)
//! - `error`: Missing / mismatched context errors
//! - `stats`: Process-wide slot activity counters
//! - `config`: `CTXCODEC_*` environment configuration
//! - `report`: Human / JSON dump of the counters

pub mod boxed;
pub mod config;
pub mod error;
pub mod report;
pub mod slot;
pub mod stats;

pub use boxed::ContextBox;
pub use config::{BridgeConfig, ReportConfig, ReportDestination, ReportFormat, bridge_config};
pub use error::ContextError;
pub use report::{emit_report, format_report, write_report};
pub use slot::{
    DrainGuard, consume, consume_boxed, drain, has_pending, with_context, write, write_boxed,
};
pub use stats::{SlotStats, SlotStatsSnapshot, slot_stats};
