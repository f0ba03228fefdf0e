// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tapscan: summarize TAP output
//!
//! Reads a TAP stream from a file or stdin, prints a report to stdout and
//! exits 0 when the suite passed, 1 when it failed and 2 when the input
//! could not be parsed.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser as _;
use tracing::{error, info};

use tapscan::config::Config;
use tapscan::report;
use tapscan_parser::{Testsuite, parse_suite};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(&config) {
        Ok(suite) if suite.ok => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<Testsuite> {
    config.validate()?;

    let reader: Box<dyn BufRead> = match config.input_path() {
        Some(path) => {
            info!(path = %path.display(), "Reading TAP file");
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading TAP from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let suite = parse_suite(reader).context("failed to parse TAP stream")?;
    info!(
        tests = suite.tests.len(),
        failed = suite.failed_count(),
        ok = suite.ok,
        "Parsed TAP stream"
    );

    let rendered = report::render(&suite, config.format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(suite)
}
