// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for single-line classification

#![no_main]

use libfuzzer_sys::fuzz_target;

use tapscan_parser::grammar::{Line, classify};

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Line::Test(fields) = classify(line) {
            let _ = fields.to_testline(1);
        }
    }
});
