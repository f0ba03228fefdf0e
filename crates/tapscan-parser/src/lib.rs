// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tapscan-parser: Test Anything Protocol parsing
//!
//! This library crate turns TAP text, typically the standard output of a
//! test process, into a structured [`Testsuite`]: per-test outcomes,
//! TODO/SKIP directives, diagnostics, inline blocks and an overall verdict.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use tapscan_parser::{Directive, parse_str};
//!
//! let suite = parse_str("1..2\nok 1 first\nok 2 # TODO later\n").unwrap();
//! assert!(suite.ok);
//! assert_eq!(suite.tests[1].directive, Directive::Todo);
//! ```
//!
//! Use [`Parser`] directly to consume test lines one at a time as they
//! arrive.

pub mod error;
pub mod grammar;
pub mod parser;
pub mod suite;
pub mod testline;

pub use error::{ErrorKind, TapError};
pub use parser::Parser;
pub use suite::{Testsuite, parse_str, parse_suite};
pub use testline::{Directive, Testline};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TapError;
    pub use crate::parser::Parser;
    pub use crate::suite::{Testsuite, parse_suite};
    pub use crate::testline::{Directive, Testline};
}
