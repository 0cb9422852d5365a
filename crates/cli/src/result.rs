// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run result types.

use serde::Serialize;

/// One failing test extracted from captured output.
///
/// Best effort: fields the scan could not locate stay empty (or `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// Category the failure was reported under.
    pub service: String,
    /// `"<suite> - <test>"`.
    pub test_name: String,
    pub error_message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub file: String,
    pub line: Option<String>,
}

/// Outcome of running one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    /// Category name.
    pub category: String,
    /// Exit code was 0. Parsed counts never override this.
    pub success: bool,
    pub duration_ms: u64,
    /// Captured stdout and stderr, in arrival order. Empty when the child
    /// inherited the console.
    pub raw_output: String,
    pub passing_count: u64,
    pub failing_count: u64,
    pub pending_count: u64,
    pub failures: Vec<FailureRecord>,
}

/// Aggregate over every executed category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total_categories: usize,
    pub passed_categories: usize,
    pub failed_categories: usize,
    pub total_passing_tests: u64,
    pub total_failing_tests: u64,
    pub total_pending_tests: u64,
    pub total_duration_ms: u64,
}

impl RunSummary {
    /// Fold one category result into the running totals.
    pub fn record(&mut self, result: &CategoryResult) {
        self.total_categories += 1;
        if result.success {
            self.passed_categories += 1;
        } else {
            self.failed_categories += 1;
        }
        self.total_passing_tests += result.passing_count;
        self.total_failing_tests += result.failing_count;
        self.total_pending_tests += result.pending_count;
    }

    /// Whether every executed category passed.
    pub fn all_passed(&self) -> bool {
        self.failed_categories == 0
    }

    /// Percentage of passed categories, rounded. Zero when nothing ran.
    pub fn success_rate(&self) -> u32 {
        if self.total_categories == 0 {
            return 0;
        }
        let pct = self.passed_categories as f64 / self.total_categories as f64 * 100.0;
        pct.round() as u32
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
