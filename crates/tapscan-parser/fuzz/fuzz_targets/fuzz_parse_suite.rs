// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for whole-stream parsing
//!
//! Raw bytes go straight to `parse_suite`, so invalid UTF-8 and missing
//! line terminators are exercised too.

#![no_main]

use libfuzzer_sys::fuzz_target;

use tapscan_parser::parse_suite;

fuzz_target!(|data: &[u8]| {
    // parse_suite should never panic on any input
    if let Ok(suite) = parse_suite(data) {
        if suite.ok {
            assert!(suite.plan_satisfied());
        }
    }
});
