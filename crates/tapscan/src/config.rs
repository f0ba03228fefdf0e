// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the tapscan command
//!
//! This module provides the command-line options: where TAP input comes
//! from, how the report is rendered, and logging verbosity.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// tapscan - summarize Test Anything Protocol output
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tapscan")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File containing TAP output
    ///
    /// Reads from stdin when omitted or when given as `-`.
    #[arg(env = "TAPSCAN_INPUT")]
    pub input: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value_t = Format::Text, env = "TAPSCAN_FORMAT")]
    pub format: Format,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Report formats
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Human-readable summary
    #[default]
    Text,
    /// The parsed suite as pretty-printed JSON
    Json,
}

impl Config {
    /// Input file path, or `None` for stdin
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an input path is given that doesn't exist or
    /// isn't a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(input) = self.input_path() {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.to_path_buf()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.to_path_buf()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.input.is_none());
        assert_eq!(config.format, Format::Text);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = Config {
            input: Some(PathBuf::from("-")),
            ..Default::default()
        };
        assert!(config.input_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose_wins() {
        let config = Config {
            verbose: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_validate_nonexistent_input() {
        let config = Config {
            input: Some(PathBuf::from("/nonexistent/path/12345.tap")),
            ..Default::default()
        };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InputNotFound(_))));
    }

    #[test]
    fn test_validate_directory_input() {
        let config = Config {
            input: Some(std::env::temp_dir()),
            ..Default::default()
        };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InputNotFile(_))));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
