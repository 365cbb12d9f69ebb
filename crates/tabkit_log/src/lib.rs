//! `tabkit_log` v1:
//! Process-wide `tracing` subscriber setup.
//!
//! The other workspace crates only emit events and never install a subscriber. Downstream
//! binaries call [`init_logging`] once at startup; the `tabkit_export` tests do the same.

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Env var holding a full filter directive (e.g. `tabkit_io_xlsx=debug,info`).
pub const C_ENV_LOG_FILTER: &str = "TABKIT_LOG";
/// Env var selecting the output format (`plain` or `json`).
pub const C_ENV_LOG_FORMAT: &str = "TABKIT_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumLogFormat {
    /// Human-readable single-line output.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLogOptions {
    /// Filter directive used when [`C_ENV_LOG_FILTER`] is unset.
    pub level: String,
    /// Output format.
    pub format: EnumLogFormat,
    /// Emit ANSI colors (plain format only).
    pub if_ansi: bool,
    /// Include event target (module path).
    pub if_with_target: bool,
}

impl Default for SpecLogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: EnumLogFormat::Plain,
            if_ansi: false,
            if_with_target: true,
        }
    }
}

impl SpecLogOptions {
    /// Defaults overridden by [`C_ENV_LOG_FORMAT`].
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(c_format) = env::var(C_ENV_LOG_FORMAT)
            && let Some(format) = parse_log_format(&c_format)
        {
            options.format = format;
        }
        options
    }
}

/// Logging setup failures.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// Filter directive could not be parsed.
    #[error("invalid log filter {directive:?}: {message}")]
    InvalidFilter {
        /// Offending directive.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("global subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Parse a format name; unknown names yield `None`.
pub fn parse_log_format(value: &str) -> Option<EnumLogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "plain" | "pretty" | "text" => Some(EnumLogFormat::Plain),
        "json" => Some(EnumLogFormat::Json),
        _ => None,
    }
}

/// Build the event filter from a directive string.
pub fn derive_env_filter(directive: &str) -> Result<EnvFilter, LogInitError> {
    EnvFilter::try_new(directive).map_err(|err| LogInitError::InvalidFilter {
        directive: directive.to_string(),
        message: err.to_string(),
    })
}

/// Install the global subscriber. Call once per process.
///
/// [`C_ENV_LOG_FILTER`] takes precedence over `options.level`.
pub fn init_logging(options: &SpecLogOptions) -> Result<(), LogInitError> {
    let c_directive = env::var(C_ENV_LOG_FILTER).unwrap_or_else(|_| options.level.clone());
    let env_filter = derive_env_filter(&c_directive)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(options.if_with_target);

    let result = match options.format {
        EnumLogFormat::Plain => builder.with_ansi(options.if_ansi).try_init(),
        EnumLogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|err| LogInitError::AlreadyInitialized(err.to_string()))?;

    tracing::debug!(
        filter = %c_directive,
        format = ?options.format,
        "logging initialized"
    );
    Ok(())
}
