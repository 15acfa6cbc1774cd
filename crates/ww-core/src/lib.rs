//! Winwait Core Library
//!
//! Estimates how long to wait for the next promotion-winner
//! announcement from sparse field observations. Two observation modes
//! feed one output contract:
//!
//! - purchase-rate: checkout throughput is converted into an estimated
//!   winner interval (one winner per K customers);
//! - winner-timestamps: directly observed announcement times are turned
//!   into interval statistics and a cadence classification.
//!
//! The engine is a pure, single-shot computation: no I/O, no state
//! across calls. The binary entry point is in `main.rs`.

pub mod cadence;
pub mod economics;
pub mod engine;
pub mod exit_codes;
pub mod logging;
pub mod rate;
pub mod recommend;
pub mod report;
pub mod validate;
pub mod waitmodel;
