use std::env;

/// Environment variable selecting the log line format.
pub const LOG_FORMAT_VAR: &str = "LIBRIS_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
///
/// The console belongs to the operator, so only problems are logged by default.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// JSON lines with timestamps.
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Text`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string (e.g. "warn", "libris_cli=debug").
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `LIBRIS_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = lookup(LOG_FORMAT_VAR)
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();
        Self { filter, format }
    }
}
