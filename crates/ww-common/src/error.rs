//! Error types for winwait.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//!
//! Validation failures name the first violated constraint and carry no
//! partial results; the engine never recovers or retries internally.
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 12,
//!   "category": "validation",
//!   "message": "missing required field: observed_purchases",
//!   "recoverable": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for winwait operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Request could not be decoded at all (malformed JSON).
    Input,
    /// Request decoded but violates the per-mode contract.
    Validation,
    /// File/stream I/O errors around the engine.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for winwait.
#[derive(Error, Debug)]
pub enum Error {
    // Validation errors (10-19)
    #[error("mode must be 'purchase_rate' or 'winner_timestamps'")]
    UnknownMode,

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("field {field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    #[error("winner_timestamps needs at least 2 entries, got {count}")]
    TooFewTimestamps { count: usize },

    #[error("unparseable timestamp {value:?}: expected HH:MM[:SS] or a full date-time")]
    TimestampUnparseable { value: String },

    #[error("winner_timestamps mixes bare HH:MM[:SS] times with full date-times")]
    MixedTimestampFormats,

    #[error("date-time timestamps must be strictly increasing (violated at entry {index})")]
    TimestampsNotIncreasing { index: usize },

    // Input decoding errors (20-29)
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    // I/O errors (30-39)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    ///
    /// Error codes are grouped by category:
    /// - 10-19: Validation errors
    /// - 20-29: Input decoding errors
    /// - 30-39: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::UnknownMode => 10,
            Error::MissingField { .. } => 11,
            Error::OutOfRange { .. } => 12,
            Error::TooFewTimestamps { .. } => 13,
            Error::TimestampUnparseable { .. } => 14,
            Error::MixedTimestampFormats => 15,
            Error::TimestampsNotIncreasing { .. } => 16,
            Error::Json(_) => 20,
            Error::Io(_) => 30,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnknownMode
            | Error::MissingField { .. }
            | Error::OutOfRange { .. }
            | Error::TooFewTimestamps { .. }
            | Error::TimestampUnparseable { .. }
            | Error::MixedTimestampFormats
            | Error::TimestampsNotIncreasing { .. } => ErrorCategory::Validation,
            Error::Json(_) => ErrorCategory::Input,
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Whether re-prompting the user for corrected input can resolve
    /// this error. Everything here is terminal for the call itself.
    pub fn is_recoverable(&self) -> bool {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Input => true,
            ErrorCategory::Io => false,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::UnknownMode => {
                "Set \"mode\" to \"purchase_rate\" or \"winner_timestamps\"."
            }
            Error::MissingField { .. } => {
                "Add the named field to the request; run 'winwait schema --request' for the full contract."
            }
            Error::OutOfRange { .. } => {
                "Counts, minutes, and lanes must be positive numbers."
            }
            Error::TooFewTimestamps { .. } => {
                "Collect at least two winner timestamps before estimating."
            }
            Error::TimestampUnparseable { .. } => {
                "Use 24-hour HH:MM[:SS] wall-clock times or RFC 3339 date-times."
            }
            Error::MixedTimestampFormats => {
                "Use one timestamp format for the whole list, not a mix."
            }
            Error::TimestampsNotIncreasing { .. } => {
                "Sort date-time entries ascending and remove duplicates."
            }
            Error::Json(_) => {
                "Check the request syntax with 'cat <file> | jq .' before passing it in."
            }
            Error::Io(_) => "Check that stdin is readable and retry.",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Invalid Request",
            ErrorCategory::Input => "Malformed Request JSON",
            ErrorCategory::Io => "I/O Error",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether corrected input can resolve the error.
    pub recoverable: bool,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_category() {
        assert_eq!(Error::UnknownMode.code(), 10);
        assert_eq!(Error::MixedTimestampFormats.code(), 15);
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.code(), 30);
    }

    #[test]
    fn validation_errors_are_recoverable() {
        assert!(Error::TooFewTimestamps { count: 1 }.is_recoverable());
        assert!(Error::MissingField { field: "model" }.is_recoverable());
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!io.is_recoverable());
    }

    #[test]
    fn structured_error_serializes() {
        let err = Error::TooFewTimestamps { count: 1 };
        let json = StructuredError::from(&err).to_json();
        assert!(json.contains(r#""code":13"#));
        assert!(json.contains(r#""category":"validation""#));
        assert!(json.contains(r#""recoverable":true"#));
    }

    #[test]
    fn human_format_has_headline_and_fix() {
        let err = Error::MixedTimestampFormats;
        let text = format_error_human(&err, false);
        assert!(text.contains("Invalid Request"));
        assert!(text.contains("mixes bare"));
        assert!(text.contains("Fix:"));
    }
}
