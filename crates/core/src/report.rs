//! Slot activity report
//!
//! Dumps the process-wide slot counters, controlled by `CTXCODEC_REPORT`
//! (see [`crate::config`]). Useful at exit of a batch job to spot contexts
//! that were written and never consumed.
//!
//! ## Feature Flag
//!
//! JSON output requires the `report-json` feature (enabled by default).
//! Without it, JSON requests fall back to the human format.

use crate::config::{ReportConfig, ReportDestination, ReportFormat, bridge_config};
use crate::stats::{SlotStatsSnapshot, slot_stats};
use std::io::Write;

// =============================================================================
// Formatting
// =============================================================================

pub fn format_human(data: &SlotStatsSnapshot) -> String {
    let mut out = String::new();
    out.push_str("=== CONTEXT SLOT REPORT ===\n");
    out.push_str(&format!("Writes:          {}\n", data.writes));
    out.push_str(&format!("Consumed:        {}\n", data.consumed));
    out.push_str(&format!("Overwritten:     {}\n", data.overwrites));
    out.push_str(&format!("Missing:         {}\n", data.missing));
    out.push_str(&format!("Type mismatch:   {}\n", data.mismatched));
    out.push_str(&format!("Drained:         {}\n", data.drained));
    out.push_str(&format!("Thread exit:     {}\n", data.released_on_teardown));
    out.push_str(&format!("In flight:       {}\n", data.in_flight()));
    out.push_str("===========================\n");
    out
}

#[cfg(feature = "report-json")]
pub fn format_json(data: &SlotStatsSnapshot) -> String {
    let obj = serde_json::json!({
        "writes": data.writes,
        "consumed": data.consumed,
        "overwrites": data.overwrites,
        "missing": data.missing,
        "mismatched": data.mismatched,
        "drained": data.drained,
        "released_on_teardown": data.released_on_teardown,
        "in_flight": data.in_flight(),
    });
    serde_json::to_string(&obj).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(not(feature = "report-json"))]
pub fn format_json(data: &SlotStatsSnapshot) -> String {
    tracing::warn!(
        "CTXCODEC_REPORT=json requires the 'report-json' feature. Falling back to human format."
    );
    format_human(data)
}

/// Render a snapshot in the requested format
pub fn format_report(data: &SlotStatsSnapshot, format: &ReportFormat) -> String {
    match format {
        ReportFormat::Human => format_human(data),
        ReportFormat::Json => format_json(data),
    }
}

// =============================================================================
// Emit
// =============================================================================

/// Write the current counters according to `config`
pub fn write_report(config: &ReportConfig) -> std::io::Result<()> {
    let output = format_report(&slot_stats().snapshot(), &config.format);

    match &config.destination {
        ReportDestination::Stderr => std::io::stderr().write_all(output.as_bytes()),
        ReportDestination::File(path) => {
            let mut f = std::fs::File::create(path)?;
            f.write_all(output.as_bytes())
        }
    }
}

/// Emit the report configured by `CTXCODEC_REPORT`, if any
pub fn emit_report() {
    let Some(config) = &bridge_config().report else {
        return;
    };

    if let Err(e) = write_report(config) {
        tracing::warn!("could not write context slot report: {}", e);
    }
}
