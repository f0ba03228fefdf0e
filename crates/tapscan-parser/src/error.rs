// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tapscan-parser

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while parsing a TAP stream
///
/// Running out of input is not an error: [`crate::Parser::next_testline`]
/// reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TapError {
    /// The underlying reader failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line in test-line position is not a test line
    #[error("line {line}: does not match a test line: \"{text}\"")]
    Grammar {
        /// 1-based input line number
        line: usize,
        /// The offending line, trimmed
        text: String,
    },

    /// A plan or test number is not a valid non-negative integer
    #[error("line {line}: invalid number \"{text}\": {source}")]
    InvalidNumber {
        /// 1-based input line number
        line: usize,
        /// The digits that failed to convert
        text: String,
        /// Conversion failure
        #[source]
        source: ParseIntError,
    },

    /// A second plan line was found
    #[error("line {line}: duplicate plan, 1..{plan} was already declared")]
    DuplicatePlan {
        /// 1-based input line number of the second plan
        line: usize,
        /// The plan recorded first
        plan: usize,
    },
}

/// Broad category of a [`TapError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading from the source failed
    Io,
    /// A line did not match the expected grammar
    Grammar,
    /// A numeric field was out of range
    InvalidNumber,
    /// The stream broke a protocol rule, such as declaring two plans
    Protocol,
}

impl TapError {
    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Grammar { .. } => ErrorKind::Grammar,
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::DuplicatePlan { .. } => ErrorKind::Protocol,
        }
    }

    /// Input line the error was detected on, if known
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::Grammar { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::DuplicatePlan { line, .. } => Some(*line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let io = TapError::from(std::io::Error::other("boom"));
        assert_eq!(io.kind(), ErrorKind::Io);
        assert_eq!(io.line(), None);

        let dup = TapError::DuplicatePlan { line: 5, plan: 3 };
        assert_eq!(dup.kind(), ErrorKind::Protocol);
        assert_eq!(dup.line(), Some(5));
    }

    #[test]
    fn test_display_carries_raw_text() {
        let err = TapError::Grammar {
            line: 2,
            text: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "line 2: does not match a test line: \"bogus\"");
    }
}
