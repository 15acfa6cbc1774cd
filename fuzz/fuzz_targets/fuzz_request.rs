//! Fuzz target for the request JSON boundary and the full engine.
//!
//! Tests that arbitrary bytes either fail to decode or produce a
//! report, without panicking anywhere in the pipeline.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ww_common::EstimateRequest;
use ww_core::engine;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    if let Ok(request) = serde_json::from_slice::<EstimateRequest>(data) {
        let _ = engine::run(&request);
    }
});
