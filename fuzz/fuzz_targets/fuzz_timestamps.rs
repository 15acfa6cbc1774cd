//! Fuzz target for winner-timestamp timeline parsing.
//!
//! Tests that arbitrary timestamp lists never panic the parser, only
//! return validation errors.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ww_core::cadence;

fuzz_target!(|entries: Vec<String>| {
    // Parsing must never panic, only return an error
    let _ = cadence::build_timeline(&entries);
    let _ = cadence::analyze(&entries);
});
