// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `sharon.toml`.
//!
//! An explicit `--config` path (or `SHARON_CONFIG`) must name an existing
//! file. Otherwise the directories from the working directory up to the
//! enclosing git root are searched, nearest first. No match means defaults.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{Error, Result};

/// Directories searched for a config file, nearest first.
///
/// Ends at the first directory containing `.git`, or at the filesystem
/// root when `start_dir` is outside any repository.
pub fn search_dirs(start_dir: &Path) -> impl Iterator<Item = &Path> {
    let mut reached_root = false;
    start_dir.ancestors().take_while(move |dir| {
        if reached_root {
            return false;
        }
        reached_root = dir.join(".git").exists();
        true
    })
}

/// Nearest `sharon.toml` between `start_dir` and the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    search_dirs(start_dir)
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Config file to load, if any. The explicit path wins over discovery.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        let found = find_config(cwd);
        match &found {
            Some(path) => tracing::debug!("discovered config at {}", path.display()),
            None => tracing::debug!("no config found above {}", cwd.display()),
        }
        return Ok(found);
    };

    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
