// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! TAP line classification
//!
//! Every input line is trimmed and then falls into exactly one [`Line`]
//! category. Classification borrows from the input and never reads more of
//! it; the [`crate::Parser`] decides what each category means in context.
//!
//! ```text
//! TAP version 13          -> Line::Version
//! 1..3                    -> Line::Plan
//! not ok 2 foo # TODO bar -> Line::Test
//! # got 3                 -> Line::Diagnostic
//!   ---                   -> Line::BlockStart
//!   ...                   -> Line::BlockEnd
//! ```

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TapError;
use crate::testline::{Directive, Testline};

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^TAP version ([0-9]+)$"));

static PLAN_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^1\.\.([0-9]+)$"));

static TESTLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(not\s+)?ok\b\s*(?:([0-9]+)\b)?\s*([^#]*?)\s*(?:#\s*(.*?))?$")
});

static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?i:(todo|skip))\b\s*(.*)$"));

static DIAGNOSTIC_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^#\s*(.*)$"));

const BLOCK_START: &str = "---";
const BLOCK_END: &str = "...";

fn compile(pattern: &str) -> Regex {
    // Only ever called with the literal patterns above.
    Regex::new(pattern).expect("valid TAP grammar pattern")
}

/// Category of one trimmed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing but whitespace
    Blank,
    /// `TAP version N`, holding the digits of N
    Version(&'a str),
    /// `1..N`, holding the digits of N
    Plan(&'a str),
    /// `ok`/`not ok` test result
    Test(TestFields<'a>),
    /// `# text`, holding the text
    Diagnostic(&'a str),
    /// `---`
    BlockStart,
    /// `...`
    BlockEnd,
    /// Anything else
    Unrecognized,
}

/// Fields captured from a test line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFields<'a> {
    /// `false` when the line starts with `not`
    pub ok: bool,
    /// Digits of the test number, if present
    pub num: Option<&'a str>,
    /// Description, trimmed
    pub description: &'a str,
    /// Directive from the trailing comment
    pub directive: Directive,
    /// Text after the directive keyword
    pub explanation: &'a str,
}

impl TestFields<'_> {
    /// Build an owned [`Testline`] found on input line `line`
    ///
    /// # Errors
    ///
    /// Returns `TapError::InvalidNumber` if the test number overflows.
    pub fn to_testline(&self, line: usize) -> Result<Testline, TapError> {
        let num = self
            .num
            .map(|digits| parse_number::<u64>(digits, line))
            .transpose()?;

        Ok(Testline {
            ok: self.ok,
            num,
            description: self.description.to_string(),
            directive: self.directive,
            explanation: self.explanation.to_string(),
            line,
            ..Default::default()
        })
    }
}

/// Classify one line; surrounding whitespace is ignored
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(caps) = VERSION_RE.captures(line) {
        return caps.get(1).map_or(Line::Unrecognized, |m| Line::Version(m.as_str()));
    }
    if let Some(caps) = PLAN_RE.captures(line) {
        return caps.get(1).map_or(Line::Unrecognized, |m| Line::Plan(m.as_str()));
    }
    if let Some(fields) = test_fields(line) {
        return Line::Test(fields);
    }
    if let Some(caps) = DIAGNOSTIC_RE.captures(line) {
        return Line::Diagnostic(caps.get(1).map_or("", |m| m.as_str()));
    }
    match line {
        BLOCK_START => Line::BlockStart,
        BLOCK_END => Line::BlockEnd,
        _ => Line::Unrecognized,
    }
}

/// Whether a raw line closes an inline block
#[must_use]
pub fn is_block_end(line: &str) -> bool {
    line.trim() == BLOCK_END
}

fn test_fields(line: &str) -> Option<TestFields<'_>> {
    let caps = TESTLINE_RE.captures(line)?;
    let comment = caps.get(4).map_or("", |m| m.as_str());

    let (directive, explanation) = match DIRECTIVE_RE.captures(comment) {
        Some(d) => (
            Directive::from_keyword(d.get(1).map_or("", |m| m.as_str())),
            d.get(2).map_or("", |m| m.as_str()),
        ),
        None => (Directive::None, ""),
    };

    Some(TestFields {
        ok: caps.get(1).is_none(),
        num: caps.get(2).map(|m| m.as_str()),
        description: caps.get(3).map_or("", |m| m.as_str()),
        directive,
        explanation,
    })
}

/// Convert captured digits into a number
///
/// # Errors
///
/// Returns `TapError::InvalidNumber` if the digits do not fit in `T`.
pub fn parse_number<T>(digits: &str, line: usize) -> Result<T, TapError>
where
    T: FromStr<Err = ParseIntError>,
{
    digits.parse().map_err(|source| TapError::InvalidNumber {
        line,
        text: digits.to_string(),
        source,
    })
}
