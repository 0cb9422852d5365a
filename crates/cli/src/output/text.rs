// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Colored console reporter.
//!
//! Format per category, indented under its phase header:
//! ```text
//! Service Tests
//!    Individual microservice tests
//!
//!    Testing bdo...
//!    bdo failed (1530ms)
//!      Error output:
//!      <captured output>
//! ```
//!
//! Informational lines are suppressed in quiet mode. Failing categories,
//! the summary, the report pointer and the final banner always print.

use std::io;
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::aggregator::RunObserver;
use crate::cli::OutputFormat;
use crate::color::scheme;
use crate::options::RunOptions;
use crate::registry::{Phase, TestCategory};
use crate::result::{CategoryResult, FailureRecord, RunSummary};

const INDENT: &str = "   ";
const DETAIL_INDENT: &str = "     ";

/// Writes run progress and the final summary to a terminal.
pub struct ConsoleReporter<'a, W: WriteColor> {
    out: W,
    options: &'a RunOptions,
}

impl<'a> ConsoleReporter<'a, StandardStream> {
    /// Reporter writing to stdout.
    pub fn stdout(options: &'a RunOptions, color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<'a, W: WriteColor> ConsoleReporter<'a, W> {
    pub fn new(out: W, options: &'a RunOptions) -> Self {
        Self { out, options }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn info(&self) -> bool {
        !self.options.is_quiet()
    }

    fn colored(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn colored_line(&mut self, indent: &str, spec: &ColorSpec, text: &str) -> io::Result<()> {
        write!(self.out, "{}", indent)?;
        self.colored(spec, text)?;
        writeln!(self.out)
    }

    /// Title line printed before anything else.
    pub fn write_title(&mut self) -> io::Result<()> {
        self.colored_line("", &scheme::pass(), "Sharon - Planet Nine Test Suite")?;
        if self.info() {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// `[debug]` dump of the resolved options (verbose mode only).
    pub fn write_options_debug(&mut self, json: &str) -> io::Result<()> {
        if !self.options.is_verbose() {
            return Ok(());
        }
        self.colored_line("", &scheme::path(), &format!("[debug] Options: {json}"))
    }

    /// Totals block.
    pub fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.colored_line("", &scheme::heading(), "Test Summary")?;
        writeln!(self.out, "{INDENT}Total Categories: {}", summary.total_categories)?;
        self.colored_line(
            INDENT,
            &scheme::pass(),
            &format!("Passed: {}", summary.passed_categories),
        )?;
        self.colored_line(
            INDENT,
            &scheme::fail(),
            &format!("Failed: {}", summary.failed_categories),
        )?;
        writeln!(
            self.out,
            "{INDENT}Tests: {} passing, {} failing, {} pending",
            summary.total_passing_tests, summary.total_failing_tests, summary.total_pending_tests
        )?;
        writeln!(self.out, "{INDENT}Duration: {}ms", summary.total_duration_ms)?;
        writeln!(self.out)
    }

    /// Pointer to the written HTML report.
    pub fn write_report_saved(&mut self, file_name: &str, file_path: &Path) -> io::Result<()> {
        self.colored_line(
            "",
            &scheme::path(),
            &format!("HTML report generated: {file_name}"),
        )?;
        self.colored_line(
            INDENT,
            &scheme::path(),
            &format!("Saved to: {}", file_path.display()),
        )?;
        writeln!(self.out)
    }

    /// The report could not be written; the run result stands.
    pub fn write_report_failed(&mut self, error: &dyn std::fmt::Display) -> io::Result<()> {
        self.colored(&scheme::warn(), "warning")?;
        writeln!(self.out, ": failed to generate HTML report: {error}")?;
        writeln!(self.out)
    }

    /// Final banner.
    pub fn write_verdict(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.all_passed() {
            self.colored_line("", &scheme::pass(), "All tests passed!")
        } else {
            self.colored_line("", &scheme::fail(), "Some tests failed!")
        }
    }

    fn write_counts(&mut self, result: &CategoryResult) -> io::Result<()> {
        writeln!(
            self.out,
            "{DETAIL_INDENT}{} passing, {} failing, {} pending",
            result.passing_count, result.failing_count, result.pending_count
        )
    }

    fn write_failure(&mut self, index: usize, failure: &FailureRecord) -> io::Result<()> {
        let indent = "        ";
        write!(self.out, "{DETAIL_INDENT}")?;
        self.colored(&scheme::heading(), &format!("{}) {}", index, failure.test_name))?;
        writeln!(self.out)?;

        if !failure.error_message.is_empty() {
            writeln!(self.out, "{indent}{}", failure.error_message)?;
        }
        if !failure.file.is_empty() {
            write!(self.out, "{indent}at ")?;
            self.colored(&scheme::path(), &failure.file)?;
            if let Some(ref line) = failure.line {
                write!(self.out, ":")?;
                self.colored(&scheme::line_number(), line)?;
            }
            writeln!(self.out)?;
        }
        if let Some(ref expected) = failure.expected {
            self.colored_line(indent, &scheme::diff_add(), &format!("+ expected: {expected}"))?;
        }
        if let Some(ref actual) = failure.actual {
            self.colored_line(indent, &scheme::diff_remove(), &format!("- actual: {actual}"))?;
        }
        Ok(())
    }

    fn write_error_output(&mut self, output: &str) -> io::Result<()> {
        self.colored_line(DETAIL_INDENT, &scheme::fail(), "Error output:")?;
        for line in output.lines() {
            writeln!(self.out, "{DETAIL_INDENT}{line}")?;
        }
        Ok(())
    }
}

impl<W: WriteColor> RunObserver for ConsoleReporter<'_, W> {
    fn phase_started(&mut self, phase: &Phase) -> io::Result<()> {
        if !self.info() {
            return Ok(());
        }
        self.colored_line("", &scheme::phase(phase.color), &phase.name)?;
        self.colored_line(INDENT, &scheme::muted(), &phase.description)?;
        writeln!(self.out)
    }

    fn category_skipped(&mut self, category: &TestCategory) -> io::Result<()> {
        if !self.info() {
            return Ok(());
        }
        self.colored_line(
            INDENT,
            &scheme::skip(),
            &format!("{} - No tests found", category.name),
        )
    }

    fn category_started(&mut self, category: &TestCategory) -> io::Result<()> {
        if !self.info() || self.options.output == OutputFormat::Minimal {
            return Ok(());
        }
        self.colored_line(
            INDENT,
            &scheme::heading(),
            &format!("Testing {}...", category.name),
        )
    }

    fn category_finished(
        &mut self,
        category: &TestCategory,
        result: &CategoryResult,
    ) -> io::Result<()> {
        let minimal = self.options.output == OutputFormat::Minimal;
        let status = if result.success { "passed" } else { "failed" };
        let message = if minimal {
            category.name.clone()
        } else {
            format!("{} {} ({}ms)", category.name, status, result.duration_ms)
        };

        if result.success {
            if self.info() {
                self.colored_line(INDENT, &scheme::pass(), &message)?;
            }
        } else {
            self.colored_line(INDENT, &scheme::fail(), &message)?;
        }

        if !self.info() {
            return Ok(());
        }

        match self.options.output {
            OutputFormat::Detailed => {
                self.write_counts(result)?;
                for (i, failure) in result.failures.iter().enumerate() {
                    self.write_failure(i + 1, failure)?;
                }
            }
            OutputFormat::Summary => {
                if !result.success
                    && !self.options.is_verbose()
                    && !result.raw_output.trim().is_empty()
                {
                    self.write_error_output(&result.raw_output)?;
                }
            }
            OutputFormat::Minimal => {}
        }
        Ok(())
    }

    fn phase_finished(&mut self, _phase: &Phase) -> io::Result<()> {
        if self.info() && self.options.output != OutputFormat::Minimal {
            writeln!(self.out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
