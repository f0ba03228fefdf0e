// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering
//!
//! Turns a parsed [`Testsuite`] into the text or JSON written to stdout.

use tapscan_parser::{Directive, Testline, Testsuite};

use crate::config::Format;

/// Render a suite in the requested format
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn render(suite: &Testsuite, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(render_text(suite)),
        Format::Json => serde_json::to_string_pretty(suite),
    }
}

/// Human-readable summary: one line per test, then totals and the verdict
#[must_use]
pub fn render_text(suite: &Testsuite) -> String {
    let mut out = String::new();

    for testline in &suite.tests {
        out.push_str(&status_line(testline));
        out.push('\n');
        for diag in testline.diagnostic.lines() {
            out.push_str(&format!("    # {diag}\n"));
        }
        for line in testline.block_lossy().lines() {
            out.push_str(&format!("    | {line}\n"));
        }
    }

    let plan = suite
        .plan
        .map_or_else(|| "none".to_string(), |n| n.to_string());
    out.push_str(&format!(
        "\n{} tests, {} passed, {} failed, {} todo, {} skipped (plan: {plan})\n",
        suite.tests.len(),
        suite.passed_count(),
        suite.failed_count(),
        suite.todo_count(),
        suite.skip_count(),
    ));
    out.push_str(if suite.ok { "Result: PASS\n" } else { "Result: FAIL\n" });
    out
}

fn status_line(testline: &Testline) -> String {
    let mut parts = vec![if testline.ok { "ok" } else { "not ok" }.to_string()];
    if let Some(num) = testline.num {
        parts.push(num.to_string());
    }
    if !testline.description.is_empty() {
        parts.push(testline.description.clone());
    }
    if testline.directive != Directive::None {
        parts.push(format!("# {}", testline.directive));
        if !testline.explanation.is_empty() {
            parts.push(testline.explanation.clone());
        }
    }
    parts.join(" ")
}
