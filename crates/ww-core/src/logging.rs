//! Structured logging for the winwait CLI.
//!
//! Dual-mode logging in the usual split:
//! - stdout is reserved for the report payload;
//! - stderr receives all log output, human-readable or JSONL.
//!
//! The library modules emit `tracing` events but never install a
//! subscriber; `main` initializes one from CLI flags, honoring the
//! `WINWAIT_LOG` env filter when set.

use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable console format (default).
    #[default]
    Human,
    /// Machine-parseable JSON lines.
    Jsonl,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    /// Standard operational info (default).
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub color: bool,
}

impl LogConfig {
    /// Build from CLI flags: `-v` counts raise verbosity, `-q` drops to
    /// errors only.
    pub fn from_flags(verbose: u8, quiet: bool, format: LogFormat, no_color: bool) -> Self {
        let level = if quiet {
            LogLevel::Error
        } else {
            match verbose {
                0 => LogLevel::Warn,
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            }
        };
        LogConfig {
            level,
            format,
            color: !no_color,
        }
    }
}

/// Install the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("WINWAIT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let result = match config.format {
        LogFormat::Human => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(config.color)
            .try_init(),
        LogFormat::Jsonl => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init(),
    };
    // Already-initialized is fine (tests install their own subscribers).
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_beats_verbose() {
        let config = LogConfig::from_flags(3, true, LogFormat::Human, false);
        assert_eq!(config.level, LogLevel::Error);
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(
            LogConfig::from_flags(0, false, LogFormat::Human, false).level,
            LogLevel::Warn
        );
        assert_eq!(
            LogConfig::from_flags(2, false, LogFormat::Human, false).level,
            LogLevel::Debug
        );
        assert_eq!(
            LogConfig::from_flags(5, false, LogFormat::Human, false).level,
            LogLevel::Trace
        );
    }

    #[test]
    fn no_color_flag_disables_ansi() {
        let config = LogConfig::from_flags(0, false, LogFormat::Human, true);
        assert!(!config.color);
    }
}
