//! Exit codes for the winwait CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. They are a stable contract for automation; changes require
//! a major version bump.
//!
//! Exit code ranges:
//! - 0: success
//! - 10-19: user/input errors (recoverable by fixing the request)
//! - 20-29: internal errors (bugs, should be reported)

use ww_common::{Error, ErrorCategory};

/// Exit codes for winwait operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Estimate produced successfully.
    Success = 0,

    /// Invalid command-line arguments (e.g. no input source given).
    ArgsError = 10,

    /// Request JSON could not be decoded.
    InputError = 11,

    /// Request decoded but failed per-mode validation.
    ValidationError = 12,

    /// Internal error (bug - please report).
    InternalError = 20,

    /// I/O error reading the request or writing the report.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map an engine error onto the exit-code contract.
    pub fn from_error(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Input => ExitCode::InputError,
            ErrorCategory::Validation => ExitCode::ValidationError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ArgsError.as_i32(), 10);
        assert_eq!(ExitCode::InputError.as_i32(), 11);
        assert_eq!(ExitCode::ValidationError.as_i32(), 12);
        assert_eq!(ExitCode::InternalError.as_i32(), 20);
        assert_eq!(ExitCode::IoError.as_i32(), 21);
    }

    #[test]
    fn errors_map_by_category() {
        assert_eq!(
            ExitCode::from_error(&Error::MixedTimestampFormats),
            ExitCode::ValidationError
        );
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ExitCode::from_error(&Error::Json(bad_json)),
            ExitCode::InputError
        );
    }
}
