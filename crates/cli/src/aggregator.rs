// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run aggregator.
//!
//! Walks phases and categories in declared order and runs them one at a
//! time: categories may share stateful external services, so two are never
//! in flight together. Results and counters live here and are only touched
//! between invocations.

use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::executor::{Execution, Executor};
use crate::parser::{parse_counts, parse_failures};
use crate::registry::{Phase, TestCategory};
use crate::result::{CategoryResult, RunSummary};

/// Receives progress as the run advances.
///
/// All methods default to doing nothing.
pub trait RunObserver {
    fn phase_started(&mut self, _phase: &Phase) -> io::Result<()> {
        Ok(())
    }

    /// The category's path does not exist; it is left out of every total.
    fn category_skipped(&mut self, _category: &TestCategory) -> io::Result<()> {
        Ok(())
    }

    fn category_started(&mut self, _category: &TestCategory) -> io::Result<()> {
        Ok(())
    }

    fn category_finished(
        &mut self,
        _category: &TestCategory,
        _result: &CategoryResult,
    ) -> io::Result<()> {
        Ok(())
    }

    fn phase_finished(&mut self, _phase: &Phase) -> io::Result<()> {
        Ok(())
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Wall clock at the start of the run; names the report file.
    pub started_at: DateTime<Local>,
    pub summary: RunSummary,
    /// One entry per executed category, in run order.
    pub results: Vec<CategoryResult>,
}

/// Drives a run over a set of phases.
pub struct RunAggregator<'a, E: Executor> {
    executor: E,
    tests_dir: &'a Path,
    extract_failures: bool,
}

impl<'a, E: Executor> RunAggregator<'a, E> {
    pub fn new(executor: E, tests_dir: &'a Path) -> Self {
        Self {
            executor,
            tests_dir,
            extract_failures: true,
        }
    }

    /// Whether to pull per-failure records out of captured output.
    pub fn with_failure_extraction(mut self, enabled: bool) -> Self {
        self.extract_failures = enabled;
        self
    }

    /// Run every category of every phase, in order.
    ///
    /// Category failures never stop the run. Only an observer error (the
    /// console going away) ends it early.
    pub fn run(&self, phases: &[Phase], observer: &mut dyn RunObserver) -> io::Result<RunOutcome> {
        let started_at = Local::now();
        let start = Instant::now();
        let mut summary = RunSummary::default();
        let mut results = Vec::new();

        tracing::trace!("run starting with {} phases", phases.len());

        for phase in phases {
            observer.phase_started(phase)?;

            for category in &phase.categories {
                let path = self.tests_dir.join(&category.relative_path);
                if !path.exists() {
                    tracing::debug!("{}: {} not found, skipping", category.name, path.display());
                    observer.category_skipped(category)?;
                    continue;
                }

                observer.category_started(category)?;
                let execution = self.executor.execute(category, &path);
                let result = self.build_result(category, execution);

                summary.record(&result);
                observer.category_finished(category, &result)?;
                results.push(result);
            }

            observer.phase_finished(phase)?;
        }

        summary.total_duration_ms = millis(start.elapsed());

        Ok(RunOutcome {
            started_at,
            summary,
            results,
        })
    }

    fn build_result(&self, category: &TestCategory, execution: Execution) -> CategoryResult {
        let counts = parse_counts(&execution.output);
        let failures = if self.extract_failures {
            parse_failures(&execution.output, &category.name)
        } else {
            Vec::new()
        };

        CategoryResult {
            category: category.name.clone(),
            success: execution.success,
            duration_ms: millis(execution.duration),
            raw_output: execution.output,
            passing_count: counts.passing,
            failing_count: counts.failing,
            pending_count: counts.pending,
            failures,
        }
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
