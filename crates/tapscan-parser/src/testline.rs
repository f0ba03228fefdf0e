// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test line types

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A TAP directive attached to a test line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Directive {
    /// No directive given
    #[default]
    None,
    /// The test is a TODO and is expected to fail
    Todo,
    /// The test was skipped
    Skip,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "None",
            Self::Todo => "TODO",
            Self::Skip => "SKIP",
        };
        f.write_str(s)
    }
}

impl Directive {
    /// Match a directive keyword, ignoring case
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.eq_ignore_ascii_case("todo") {
            Self::Todo
        } else if keyword.eq_ignore_ascii_case("skip") {
            Self::Skip
        } else {
            Self::None
        }
    }
}

/// A single reported test result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Testline {
    /// Whether the test point passed (`ok` rather than `not ok`)
    pub ok: bool,
    /// The test number, if the line carried one
    pub num: Option<u64>,
    /// Short description
    pub description: String,
    /// TODO/SKIP directive
    pub directive: Directive,
    /// Text following the directive keyword
    pub explanation: String,
    /// Comment lines following the test line, each newline-terminated
    pub diagnostic: String,
    /// Raw content of the inline block following the test line
    #[serde(serialize_with = "serialize_lossy")]
    pub block: Vec<u8>,
    /// 1-based input line number of the test line
    pub line: usize,
}

impl Testline {
    /// Whether the line carries a TODO directive
    #[must_use]
    pub fn is_todo(&self) -> bool {
        self.directive == Directive::Todo
    }

    /// Whether the line carries a SKIP directive
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.directive == Directive::Skip
    }

    /// Whether any diagnostic lines were attached
    #[must_use]
    pub fn has_diagnostic(&self) -> bool {
        !self.diagnostic.is_empty()
    }

    /// Whether an inline block was attached
    #[must_use]
    pub fn has_block(&self) -> bool {
        !self.block.is_empty()
    }

    /// The inline block as text, replacing invalid UTF-8
    #[must_use]
    pub fn block_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.block)
    }

    pub(crate) fn push_diagnostic(&mut self, text: &str) {
        self.diagnostic.push_str(text);
        self.diagnostic.push('\n');
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
