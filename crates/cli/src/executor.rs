// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess test executor.
//!
//! Resolves how a category is run, then runs it as exactly one child
//! process and waits for it. No retries, and no wall-clock timeout beyond
//! the one mocha enforces itself in the fallback invocation.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use crate::options::RunOptions;
use crate::registry::TestCategory;

/// Custom runner entry point inside a category directory.
pub const RUNNER_FILE: &str = "test-runner.js";

/// Package manifest inside a category directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Glob handed to mocha when a directory has neither runner nor manifest.
pub const FALLBACK_GLOB: &str = "**/*.test.js";

/// Mocha timeout for single-file categories.
pub const SPELL_FILE_TIMEOUT_MS: u64 = 10_000;

/// A resolved command for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    pub command: String,
    pub args: Vec<String>,
    pub working_directory: PathBuf,
}

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoPolicy {
    /// Child writes straight to our console; nothing is captured.
    Inherit,
    /// stdout and stderr are captured into one buffer in arrival order.
    Capture,
}

/// What came back from one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Exit code was 0.
    pub success: bool,
    pub duration: Duration,
    /// Captured output, or the spawn error message if the child never started.
    pub output: String,
}

/// Runs one category to completion.
pub trait Executor {
    /// `path` is the category's location on disk (already known to exist).
    fn execute(&self, category: &TestCategory, path: &Path) -> Execution;
}

/// Resolve the command for a category at `path`.
///
/// Directories: `test-runner.js`, then `package.json`, then direct mocha over
/// [`FALLBACK_GLOB`]. A file category is handed to mocha from the tests root.
pub fn resolve_plan(path: &Path, options: &RunOptions) -> ExecutionPlan {
    let interpreters = &options.interpreters;

    if path.is_file() {
        let file = path
            .strip_prefix(&options.tests_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        return ExecutionPlan {
            command: interpreters.npx.clone(),
            args: vec![
                "mocha".to_string(),
                file,
                "--timeout".to_string(),
                SPELL_FILE_TIMEOUT_MS.to_string(),
            ],
            working_directory: options.tests_dir.clone(),
        };
    }

    let (command, args) = if path.join(RUNNER_FILE).exists() {
        (interpreters.node.clone(), vec![RUNNER_FILE.to_string()])
    } else if path.join(MANIFEST_FILE).exists() {
        (interpreters.npm.clone(), vec!["test".to_string()])
    } else {
        (
            interpreters.npx.clone(),
            vec![
                "mocha".to_string(),
                FALLBACK_GLOB.to_string(),
                "--timeout".to_string(),
                options.mocha_timeout_ms.to_string(),
            ],
        )
    };

    ExecutionPlan {
        command,
        args,
        working_directory: path.to_path_buf(),
    }
}

/// Spawn the plan's command and block until it exits.
///
/// A spawn failure comes back as an unsuccessful [`Execution`] whose output
/// is the error message.
pub fn run_subprocess(plan: &ExecutionPlan, policy: IoPolicy) -> Execution {
    let start = Instant::now();

    let mut cmd = Command::new(&plan.command);
    cmd.args(&plan.args).current_dir(&plan.working_directory);

    match policy {
        IoPolicy::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
            match cmd.status() {
                Ok(status) => Execution {
                    success: status.success(),
                    duration: start.elapsed(),
                    output: String::new(),
                },
                Err(e) => spawn_failure(plan, start, &e),
            }
        }
        IoPolicy::Capture => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(e) => return spawn_failure(plan, start, &e),
            };

            let (tx, rx) = crossbeam_channel::unbounded::<Vec<u8>>();
            let mut readers = Vec::with_capacity(2);
            if let Some(stdout) = child.stdout.take() {
                let tx = tx.clone();
                readers.push(std::thread::spawn(move || forward(stdout, tx)));
            }
            if let Some(stderr) = child.stderr.take() {
                let tx = tx.clone();
                readers.push(std::thread::spawn(move || forward(stderr, tx)));
            }
            drop(tx);

            // Ends once both readers hit EOF and drop their senders.
            let mut buf = Vec::new();
            for chunk in rx {
                buf.extend_from_slice(&chunk);
            }
            for reader in readers {
                let _ = reader.join();
            }

            let status = child.wait();
            let output = String::from_utf8_lossy(&buf).into_owned();
            match status {
                Ok(status) => Execution {
                    success: status.success(),
                    duration: start.elapsed(),
                    output,
                },
                Err(e) => Execution {
                    success: false,
                    duration: start.elapsed(),
                    output: format!("{output}failed to wait for {}: {e}", plan.command),
                },
            }
        }
    }
}

/// Pump a pipe into the channel until EOF.
fn forward(mut pipe: impl Read, tx: Sender<Vec<u8>>) {
    let mut chunk = [0u8; 8192];
    loop {
        match pipe.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if tx.send(chunk[..n].to_vec()).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
}

fn spawn_failure(plan: &ExecutionPlan, start: Instant, e: &std::io::Error) -> Execution {
    tracing::warn!("failed to spawn {}: {}", plan.command, e);
    Execution {
        success: false,
        duration: start.elapsed(),
        output: format!("failed to spawn {}: {e}", plan.command),
    }
}

/// Executor that spawns real child processes.
pub struct SubprocessExecutor<'a> {
    options: &'a RunOptions,
}

impl<'a> SubprocessExecutor<'a> {
    pub fn new(options: &'a RunOptions) -> Self {
        Self { options }
    }

    fn io_policy(&self) -> IoPolicy {
        if self.options.captures_output() {
            IoPolicy::Capture
        } else {
            IoPolicy::Inherit
        }
    }
}

impl Executor for SubprocessExecutor<'_> {
    fn execute(&self, category: &TestCategory, path: &Path) -> Execution {
        let plan = resolve_plan(path, self.options);
        tracing::debug!(
            "{}: {} {} (in {})",
            category.name,
            plan.command,
            plan.args.join(" "),
            plan.working_directory.display()
        );
        run_subprocess(&plan, self.io_policy())
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
