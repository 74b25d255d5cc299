//! Bridge configuration (parsed once from the environment)
//!
//! - `CTXCODEC_WARN_OVERWRITE`: `1`/`true` logs overwritten contexts at
//!   `warn` instead of `debug`. An overwrite means a context was written and
//!   never consumed, which is a caller ordering bug.
//! - `CTXCODEC_REPORT`: slot activity report destination
//!   - unset, empty or `0` → no report
//!   - `1` → human-readable to stderr
//!   - `json` → JSON to stderr
//!   - `json:/path` → JSON to file

use std::sync::OnceLock;

/// Output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

/// Parsed report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse a `CTXCODEC_REPORT` value
    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "" | "0" => None,
            "1" => Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            }),
            "json" => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            }),
            s if s.starts_with("json:") => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::File(s[5..].to_string()),
            }),
            _ => {
                tracing::warn!("CTXCODEC_REPORT='{}' not recognized, ignoring", val);
                None
            }
        }
    }
}

/// Everything the bridge reads from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeConfig {
    pub warn_on_overwrite: bool,
    pub report: Option<ReportConfig>,
}

impl BridgeConfig {
    /// Build from the `CTXCODEC_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test fixtures)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let warn_on_overwrite = lookup("CTXCODEC_WARN_OVERWRITE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        let report = lookup("CTXCODEC_REPORT").and_then(|v| ReportConfig::parse(&v));

        BridgeConfig {
            warn_on_overwrite,
            report,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

static BRIDGE_CONFIG: OnceLock<BridgeConfig> = OnceLock::new();

/// Process-wide configuration, read from the environment on first use
pub fn bridge_config() -> &'static BridgeConfig {
    BRIDGE_CONFIG.get_or_init(BridgeConfig::from_env)
}
