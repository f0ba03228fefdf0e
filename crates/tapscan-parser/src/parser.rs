// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Incremental TAP parser
//!
//! The parser reads one line ahead of the test line it is building. Header
//! lines (version, plan) are consumed when the parser is created; after
//! that each call to [`Parser::next_testline`] turns the pending line into a
//! [`Testline`] and absorbs the diagnostics, block and trailing plan that
//! follow it.
//!
//! # Example
//!
//! ```
//! use tapscan_parser::Parser;
//!
//! let input = "1..2\nok 1 first\n# note\nnot ok 2 second\n";
//! let mut parser = Parser::new(input.as_bytes()).unwrap();
//!
//! while let Some(testline) = parser.next_testline().unwrap() {
//!     println!("{} {:?}", testline.ok, testline.description);
//! }
//! assert_eq!(parser.partial().tests.len(), 2);
//! ```

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::TapError;
use crate::grammar::{Line, classify, is_block_end, parse_number};
use crate::suite::Testsuite;
use crate::testline::Testline;

/// A TAP parser over a buffered reader
///
/// The parser owns its reader; nothing else may read from it while the
/// parser is alive.
pub struct Parser<R> {
    reader: R,
    line_no: usize,
    lookahead: Option<String>,
    pub(crate) suite: Testsuite,
}

impl<R: BufRead> Parser<R> {
    /// Create a parser and consume the header
    ///
    /// An optional `TAP version N` line and an optional leading `1..N` plan
    /// are read and recorded. The first line that is neither is kept as the
    /// lookahead for [`Parser::next_testline`]. Empty input is accepted and
    /// yields a parser with nothing left to read.
    ///
    /// # Errors
    ///
    /// Returns `TapError::Io` if the reader fails, or
    /// `TapError::InvalidNumber` if the plan count is out of range.
    pub fn new(reader: R) -> Result<Self, TapError> {
        let mut parser = Self {
            reader,
            line_no: 0,
            lookahead: None,
            suite: Testsuite::default(),
        };

        let mut pending = parser.read_line()?;

        // An out-of-range version still marks a version line; only the value is lost.
        let version_line = match pending.as_deref().map(classify) {
            Some(Line::Version(digits)) => Some(digits.parse::<u32>().ok()),
            _ => None,
        };
        if let Some(version) = version_line {
            debug!(version, "TAP version declared");
            parser.suite.version = version;
            pending = parser.read_line()?;
        }

        let plan = match pending.as_deref().map(classify) {
            Some(Line::Plan(digits)) => Some(parse_number::<usize>(digits, parser.line_no)?),
            _ => None,
        };
        if plan.is_some() {
            debug!(plan, "leading plan declared");
            parser.suite.plan = plan;
            pending = parser.read_line()?;
        }

        parser.lookahead = pending;
        Ok(parser)
    }

    /// Parse the next test line
    ///
    /// Returns `Ok(None)` once the input is exhausted. A returned test line
    /// is complete: every diagnostic and block that follows it has been
    /// attached, and it has been appended to the suite.
    ///
    /// # Errors
    ///
    /// - `TapError::Grammar` if the pending line is not a test line
    /// - `TapError::DuplicatePlan` if a plan follows an already declared plan
    /// - `TapError::InvalidNumber` if a test number or plan overflows
    /// - `TapError::Io` if the reader fails
    pub fn next_testline(&mut self) -> Result<Option<&Testline>, TapError> {
        let Some(text) = self.lookahead.take() else {
            return Ok(None);
        };
        let line = self.line_no;

        let kind = classify(&text);
        if let (Line::Plan(_), Some(plan)) = (&kind, self.suite.plan) {
            return Err(TapError::DuplicatePlan { line, plan });
        }
        let Line::Test(fields) = kind else {
            return Err(TapError::Grammar { line, text });
        };
        let mut testline = fields.to_testline(line)?;
        trace!(line, ok = testline.ok, num = ?testline.num, "test line");

        while let Some(next) = self.read_line()? {
            let kind = classify(&next);
            match kind {
                Line::Diagnostic(text) => testline.push_diagnostic(text),
                Line::BlockStart => {
                    if !self.read_block(&mut testline)? {
                        break;
                    }
                }
                Line::Plan(digits) => {
                    if let Some(plan) = self.suite.plan {
                        return Err(TapError::DuplicatePlan {
                            line: self.line_no,
                            plan,
                        });
                    }
                    let plan = parse_number::<usize>(digits, self.line_no)?;
                    debug!(plan, "trailing plan declared");
                    self.suite.plan = Some(plan);
                    self.lookahead = self.read_line()?;
                    break;
                }
                _ => {
                    self.lookahead = Some(next);
                    break;
                }
            }
        }

        self.suite.tests.push(testline);
        Ok(self.suite.tests.last())
    }

    /// The suite as accumulated so far
    ///
    /// Until [`Parser::run`] has completed this is a partial record and its
    /// `ok` field is not a verdict.
    #[must_use]
    pub fn partial(&self) -> &Testsuite {
        &self.suite
    }

    /// Consume the parser, returning the suite accumulated so far
    #[must_use]
    pub fn into_suite(self) -> Testsuite {
        self.suite
    }

    /// Number of input lines read so far
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// Read block lines into `testline` until a block end marker.
    /// Returns `false` if the input ended first.
    fn read_block(&mut self, testline: &mut Testline) -> Result<bool, TapError> {
        let start = self.line_no;
        while let Some(raw) = self.read_raw()? {
            if is_block_end(&String::from_utf8_lossy(&raw)) {
                trace!(start, end = self.line_no, "block closed");
                return Ok(true);
            }
            testline.block.extend_from_slice(&raw);
        }
        debug!(start, "input ended inside block");
        Ok(false)
    }

    /// Next non-blank line, trimmed
    fn read_line(&mut self) -> Result<Option<String>, TapError> {
        while let Some(raw) = self.read_raw()? {
            let text = String::from_utf8_lossy(&raw);
            let text = text.trim();
            if !text.is_empty() {
                return Ok(Some(text.to_string()));
            }
        }
        Ok(None)
    }

    fn read_raw(&mut self) -> Result<Option<Vec<u8>>, TapError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(buf))
    }
}
