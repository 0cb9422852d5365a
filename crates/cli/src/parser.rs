// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mocha output parsing.
//!
//! Two independent passes over captured text:
//! - count extraction: `N passing`, `N failing`, `N pending`;
//! - failure extraction: a line-oriented scan over the numbered failure
//!   blocks mocha prints after its summary.
//!
//! Neither pass fails. Text that doesn't match the expected layout yields
//! zero counts and empty fields.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::result::FailureRecord;

#[allow(clippy::expect_used)]
static PASSING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) passing").expect("valid regex"));

#[allow(clippy::expect_used)]
static FAILING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) failing").expect("valid regex"));

#[allow(clippy::expect_used)]
static PENDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) pending").expect("valid regex"));

/// `  1) Suite name`
#[allow(clippy::expect_used)]
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\)\s+(.*\S)\s*$").expect("valid regex"));

/// Test name line under a heading: five or more spaces of indentation.
#[allow(clippy::expect_used)]
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {5,}(\S.*?)\s*$").expect("valid regex"));

/// `AssertionError: ...`, `AssertionError [ERR_ASSERTION]: ...`, `TypeError: ...`
#[allow(clippy::expect_used)]
static ERROR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\w*Error(?: \[\w+\])?:.*?)\s*$").expect("valid regex")
});

/// `at fn (file:line:col)` or `at file:line:col`
#[allow(clippy::expect_used)]
static FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*at (?:.*\()?(.+?):(\d+):\d+\)?\s*$").expect("valid regex")
});

const DIFF_DELIMITER: &str = "+ expected - actual";

/// Summary counts found in captured output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestCounts {
    pub passing: u64,
    pub failing: u64,
    pub pending: u64,
}

/// Extract the `N passing / failing / pending` counts.
///
/// The first occurrence of each pattern wins; a missing pattern counts as zero.
pub fn parse_counts(text: &str) -> TestCounts {
    TestCounts {
        passing: first_count(&PASSING_RE, text),
        failing: first_count(&FAILING_RE, text),
        pending: first_count(&PENDING_RE, text),
    }
}

fn first_count(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Diff block progress inside a failure body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiffState {
    /// No `+ expected - actual` delimiter seen yet.
    Idle,
    /// Inside the diff: `-` lines are actual, `+` lines are expected.
    Open,
    /// Expected captured; `+`/`-` lines are ordinary text again.
    Done,
}

#[derive(Debug)]
enum ScanState {
    /// Looking for a numbered failure heading.
    Seek,
    /// Heading seen; the next line must be the test name, indented deeper
    /// than the heading.
    CaptureName { suite: String, indent: usize },
    /// Accumulating error message, diff and location.
    CaptureBody { record: FailureRecord, diff: DiffState },
}

/// Extract one [`FailureRecord`] per numbered failure block.
///
/// The body of a record ends at the next heading, at the end of the text, or
/// at its first stack frame. Lines after the first frame are not inspected,
/// so error text printed below the stack is dropped.
pub fn parse_failures(text: &str, service: &str) -> Vec<FailureRecord> {
    let mut failures = Vec::new();
    let mut state = ScanState::Seek;

    for line in text.lines() {
        state = match state {
            ScanState::Seek => seek(line),
            ScanState::CaptureName { suite, indent } => match NAME_RE.captures(line) {
                Some(caps) if indentation(line) > indent => {
                    let name = caps[1].trim_end_matches(':').trim_end();
                    ScanState::CaptureBody {
                        record: FailureRecord {
                            service: service.to_string(),
                            test_name: format!("{suite} - {name}"),
                            ..FailureRecord::default()
                        },
                        diff: DiffState::Idle,
                    }
                }
                // Malformed block, or an inline progress marker followed by a
                // sibling test: drop it, but the line may start the next one.
                _ => seek(line),
            },
            ScanState::CaptureBody { mut record, mut diff } => {
                if HEADING_RE.is_match(line) {
                    failures.push(record);
                    seek(line)
                } else if let Some(caps) = FRAME_RE.captures(line) {
                    if record.file.is_empty() {
                        record.file = caps[1].to_string();
                    }
                    if record.line.is_none() {
                        record.line = Some(caps[2].to_string());
                    }
                    failures.push(record);
                    ScanState::Seek
                } else {
                    scan_body_line(line, &mut record, &mut diff);
                    ScanState::CaptureBody { record, diff }
                }
            }
        };
    }

    if let ScanState::CaptureBody { record, .. } = state {
        failures.push(record);
    }

    failures
}

fn seek(line: &str) -> ScanState {
    match HEADING_RE.captures(line) {
        Some(caps) => ScanState::CaptureName {
            suite: caps[1].to_string(),
            indent: indentation(line),
        },
        None => ScanState::Seek,
    }
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn scan_body_line(line: &str, record: &mut FailureRecord, diff: &mut DiffState) {
    let trimmed = line.trim();

    if *diff == DiffState::Idle && trimmed.contains(DIFF_DELIMITER) {
        *diff = DiffState::Open;
        return;
    }

    if *diff == DiffState::Open {
        if let Some(actual) = trimmed.strip_prefix('-') {
            if record.actual.is_none() {
                record.actual = Some(actual.to_string());
            }
            return;
        }
        if let Some(expected) = trimmed.strip_prefix('+') {
            record.expected = Some(expected.to_string());
            *diff = DiffState::Done;
            return;
        }
    }

    if record.error_message.is_empty()
        && let Some(caps) = ERROR_RE.captures(line)
    {
        record.error_message = caps[1].to_string();
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
