// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML run report.
//!
//! One self-contained file per run, named from the run's start time at
//! minute resolution. Two runs started in the same minute write the same
//! file; the later one wins.

mod html;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::aggregator::RunOutcome;
use crate::error::{Error, Result};
use crate::result::{CategoryResult, RunSummary};

pub use html::{escape_html, render_html};

/// A rendered run, written to disk.
#[derive(Debug, Clone)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub summary: RunSummary,
    pub results: Vec<CategoryResult>,
    pub file_path: PathBuf,
}

impl Report {
    /// File name component of [`Report::file_path`].
    pub fn file_name(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

/// `YYYY-MM-DD-HHmm` in local time.
pub fn timestamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%d-%H%M").to_string()
}

/// `sharon-test-report-YYYY-MM-DD-HHmm.html`.
pub fn report_file_name(started_at: DateTime<Local>) -> String {
    format!("sharon-test-report-{}.html", timestamp(started_at))
}

/// Render `outcome` and write it into `reports_dir`, creating the directory
/// if needed. An existing file with the same name is overwritten.
pub fn write_report(reports_dir: &Path, outcome: &RunOutcome) -> Result<Report> {
    std::fs::create_dir_all(reports_dir).map_err(|e| Error::Io {
        path: reports_dir.to_path_buf(),
        source: e,
    })?;

    let generated_at = Local::now();
    let file_path = reports_dir.join(report_file_name(outcome.started_at));
    let html = render_html(outcome, generated_at);

    std::fs::write(&file_path, html).map_err(|e| Error::Io {
        path: file_path.clone(),
        source: e,
    })?;
    tracing::debug!("report written to {}", file_path.display());

    Ok(Report {
        generated_at,
        summary: outcome.summary,
        results: outcome.results.clone(),
        file_path,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
