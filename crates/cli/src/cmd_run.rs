// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use anyhow::Context;
use termcolor::ColorChoice;

use sharon::aggregator::RunAggregator;
use sharon::cli::Cli;
use sharon::color::resolve_color;
use sharon::config::{self, Config};
use sharon::discovery;
use sharon::error::ExitCode;
use sharon::executor::SubprocessExecutor;
use sharon::options::{Interpreters, RunOptions};
use sharon::output::ConsoleReporter;
use sharon::registry::select_phases;
use sharon::report::write_report;

/// Run the selected phases, print the summary and write the report.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let color_choice = resolve_color(cli.no_color, cli.color);
    let options = RunOptions::resolve(
        cli,
        &config,
        color_choice != ColorChoice::Never,
        Interpreters::from_env(),
    )?;

    let options_json =
        serde_json::to_string_pretty(&options).context("failed to serialize run options")?;
    tracing::debug!("run options: {}", options_json);

    let mut console = ConsoleReporter::stdout(&options, color_choice);
    console.write_title()?;
    console.write_options_debug(&options_json)?;

    let phases = select_phases(&options.phases);
    let aggregator = RunAggregator::new(SubprocessExecutor::new(&options), &options.tests_dir)
        .with_failure_extraction(options.captures_output());
    let outcome = aggregator
        .run(&phases, &mut console)
        .context("failed to write run progress")?;

    console.write_summary(&outcome.summary)?;

    match write_report(&options.reports_dir, &outcome) {
        Ok(report) => console.write_report_saved(report.file_name(), &report.file_path)?,
        Err(e) => {
            tracing::warn!("report not written: {}", e);
            console.write_report_failed(&e)?;
        }
    }

    console.write_verdict(&outcome.summary)?;

    if outcome.summary.all_passed() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::TestsFailed)
    }
}
