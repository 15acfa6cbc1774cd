//! Winwait shared types.
//!
//! The request/report wire contract consumed by the CLI and produced by
//! the estimation engine, plus the unified error type. Everything here
//! is plain data; the algorithms live in `ww-core`.

pub mod contract;
pub mod error;

pub use contract::{
    CadenceAnalysis, CadenceModel, Economics, EstimateReport, EstimateRequest, ModeTag,
    RateBreakdown, Recommendation, WaitEstimates,
};
pub use error::{format_error_human, Error, ErrorCategory, Result, StructuredError};

/// Contract schema version, bumped on breaking changes to the wire format.
pub const SCHEMA_VERSION: &str = "1";
