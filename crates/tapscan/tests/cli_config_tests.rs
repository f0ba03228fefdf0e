// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for argument parsing
//!
//! These tests verify input selection, report format and logging flags.

use std::path::{Path, PathBuf};

use clap::Parser;
use tapscan::config::{Config, Format};
use tracing::Level;

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_no_input_reads_stdin() {
    let config = Config::try_parse_from(["tapscan"]).expect("parse should succeed");
    assert!(config.input_path().is_none());
}

#[test]
fn test_positional_input() {
    let config = Config::try_parse_from(["tapscan", "out.tap"]).expect("parse should succeed");
    assert_eq!(config.input, Some(PathBuf::from("out.tap")));
    assert_eq!(config.input_path(), Some(Path::new("out.tap")));
}

#[test]
fn test_dash_input_reads_stdin() {
    let config = Config::try_parse_from(["tapscan", "-"]).expect("parse should succeed");
    assert!(config.input_path().is_none());
}

// ============================================================================
// --format
// ============================================================================

#[test]
fn test_format_default_text() {
    let config = Config::try_parse_from(["tapscan"]).expect("parse should succeed");
    assert_eq!(config.format, Format::Text);
}

#[test]
fn test_format_json() {
    let config =
        Config::try_parse_from(["tapscan", "--format", "json"]).expect("parse should succeed");
    assert_eq!(config.format, Format::Json);

    let config = Config::try_parse_from(["tapscan", "-f", "json"]).expect("parse should succeed");
    assert_eq!(config.format, Format::Json);
}

#[test]
fn test_format_unknown_rejected() {
    let result = Config::try_parse_from(["tapscan", "--format", "xml"]);
    assert!(result.is_err(), "Unknown formats should be rejected");
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_sets_debug_log_level() {
    let config = Config::try_parse_from(["tapscan", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_sets_warn_log_level() {
    let config = Config::try_parse_from(["tapscan", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["tapscan", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}
