// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use crate::aggregator::RunObserver;
use crate::result::CategoryResult;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Observer that ignores everything.
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// A finished category with the given outcome and captured output.
pub fn category_result(name: &str, success: bool, raw_output: &str) -> CategoryResult {
    CategoryResult {
        category: name.to_string(),
        success,
        duration_ms: 1200,
        raw_output: raw_output.to_string(),
        passing_count: 0,
        failing_count: 0,
        pending_count: 0,
        failures: Vec::new(),
    }
}
