// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Suite aggregation
//!
//! A [`Testsuite`] collects the test lines of one TAP stream and, once the
//! stream is exhausted, carries the verdict for the whole run.

use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::error::TapError;
use crate::parser::Parser;
use crate::testline::{Directive, Testline};

/// The outcome of a TAP stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testsuite {
    /// Whether the suite as a whole succeeded
    pub ok: bool,
    /// Test lines in encounter order
    pub tests: Vec<Testline>,
    /// Declared number of tests, `None` if no plan was seen
    pub plan: Option<usize>,
    /// Declared TAP version, if any
    pub version: Option<u32>,
}

impl Default for Testsuite {
    fn default() -> Self {
        Self {
            ok: true,
            tests: Vec::new(),
            plan: None,
            version: None,
        }
    }
}

impl Testsuite {
    /// Whether a non-zero plan was declared and matches the number of tests
    #[must_use]
    pub fn plan_satisfied(&self) -> bool {
        matches!(self.plan, Some(n) if n != 0 && n == self.tests.len())
    }

    /// Combine the running verdict with the plan check
    pub fn conclude(&mut self) {
        self.ok = self.ok && self.plan_satisfied();
    }

    /// Number of tests reported `ok`
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.ok).count()
    }

    /// Number of tests reported `not ok`
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.tests.iter().filter(|t| !t.ok).count()
    }

    /// Number of tests carrying a TODO directive
    #[must_use]
    pub fn todo_count(&self) -> usize {
        self.count_directive(Directive::Todo)
    }

    /// Number of tests carrying a SKIP directive
    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.count_directive(Directive::Skip)
    }

    /// Tests reported `not ok`
    #[must_use]
    pub fn failing_tests(&self) -> Vec<&Testline> {
        self.tests.iter().filter(|t| !t.ok).collect()
    }

    fn count_directive(&self, directive: Directive) -> usize {
        self.tests
            .iter()
            .filter(|t| t.directive == directive)
            .count()
    }
}

impl<R: BufRead> Parser<R> {
    /// Parse the rest of the stream and compute the suite verdict
    ///
    /// Blocks until the reader is exhausted. On error the test lines parsed
    /// so far remain available through [`Parser::partial`], but they do not
    /// form a verdict.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`Parser::next_testline`].
    pub fn run(&mut self) -> Result<&Testsuite, TapError> {
        while let Some(testline) = self.next_testline()? {
            let ok = testline.ok;
            self.suite.ok &= ok;
        }
        self.suite.conclude();

        debug!(
            ok = self.suite.ok,
            plan = ?self.suite.plan,
            tests = self.suite.tests.len(),
            "TAP stream parsed"
        );
        Ok(&self.suite)
    }
}

/// Parse a complete TAP stream
///
/// # Errors
///
/// Returns the first [`TapError`] encountered.
pub fn parse_suite<R: BufRead>(reader: R) -> Result<Testsuite, TapError> {
    let mut parser = Parser::new(reader)?;
    parser.run()?;
    Ok(parser.into_suite())
}

/// Parse TAP held in memory
///
/// # Errors
///
/// Returns the first [`TapError`] encountered.
pub fn parse_str(input: &str) -> Result<Testsuite, TapError> {
    parse_suite(input.as_bytes())
}
