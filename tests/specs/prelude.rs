// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! A [`Suite`] is a throwaway project: a git root holding a `tests/` tree of
//! categories whose runners are shell scripts, so no Node toolchain is needed.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the sharon binary
pub fn sharon_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sharon"));
    cmd.env_remove("SHARON_CONFIG")
        .env_remove("SHARON_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Shell script that prints `output` and exits with `code`.
pub fn script(output: &str, code: i32) -> String {
    format!("cat <<'OUT'\n{output}\nOUT\nexit {code}\n")
}

/// Temporary project with a category tree.
pub struct Suite {
    dir: TempDir,
}

impl Suite {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root().join("tests")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    /// Write a file relative to the project root.
    pub fn file(self, path: &str, content: &str) -> Self {
        let full = self.root().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
        self
    }

    /// Category whose `test-runner.js` prints `output` and exits with `code`.
    pub fn category(self, name: &str, output: &str, code: i32) -> Self {
        let path = format!("tests/{name}/test-runner.js");
        self.file(&path, &script(output, code))
    }

    /// Report files written so far.
    pub fn reports(&self) -> Vec<String> {
        match fs::read_dir(self.reports_dir()) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// `sharon` run from the project root with shell interpreters.
    pub fn cmd(&self) -> Command {
        let mut cmd = sharon_cmd();
        cmd.current_dir(self.root())
            .env("SHARON_NODE", "sh")
            .env("SHARON_NPM", "sh")
            .env("SHARON_NPX", "sh");
        cmd
    }

    /// [`Suite::cmd`] pointed at this suite's tests and reports directories.
    pub fn run(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--tests-dir")
            .arg(self.tests_dir())
            .arg("--reports-dir")
            .arg(self.reports_dir());
        cmd
    }
}
