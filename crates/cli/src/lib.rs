// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sharon: runs integration suites phase by phase and reports the results.

pub mod aggregator;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod options;
pub mod output;
pub mod parser;
pub mod registry;
pub mod report;
pub mod result;

pub use aggregator::{RunAggregator, RunObserver, RunOutcome};
pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use executor::{Executor, SubprocessExecutor};
pub use options::RunOptions;
pub use registry::{Phase, PhaseKind, TestCategory};
pub use report::Report;
pub use result::{CategoryResult, FailureRecord, RunSummary};

#[cfg(test)]
pub mod test_utils;
