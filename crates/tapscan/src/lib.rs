// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tapscan library
//!
//! This module exports the command-line configuration and report rendering
//! of tapscan for use in integration tests and as a library.

pub mod config;
pub mod report;
