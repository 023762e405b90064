//! Development log settings.
//!
//! The log policy is an explicit value handed to the engine at
//! construction instead of an ambient global: the host decides once, per
//! engine instance. Errors always pass through the `log` facade;
//! development-only messages are gated on [`LogSettings`].

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Log verbosity tiers exposed to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogVerbosity {
    Fatal,
    Error,
    Warning,
    Log,
    Verbose,
    VeryVerbose,
}

impl LogVerbosity {
    /// Map a configured tier onto the `log` facade's filter levels.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogVerbosity::Fatal | LogVerbosity::Error => LevelFilter::Error,
            LogVerbosity::Warning => LevelFilter::Warn,
            LogVerbosity::Log => LevelFilter::Info,
            LogVerbosity::Verbose => LevelFilter::Debug,
            LogVerbosity::VeryVerbose => LevelFilter::Trace,
        }
    }
}

/// Development logging policy for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Master switch for development-only messages (state transitions,
    /// activation traces). Errors are not affected.
    pub development_messages: bool,
    pub verbosity: LogVerbosity,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            development_messages: false,
            verbosity: LogVerbosity::Log,
        }
    }
}
