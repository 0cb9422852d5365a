// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles sharon.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    run: Option<FlexibleRunConfig>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct FlexibleRunConfig {
    tests_dir: Option<PathBuf>,
    reports_dir: Option<PathBuf>,
    mocha_timeout_ms: Option<u64>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Run settings.
    pub run: RunConfig,
}

/// The `[run]` table. Unset fields fall back to built-in defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tests_dir: Option<PathBuf>,
    pub reports_dir: Option<PathBuf>,
    pub mocha_timeout_ms: Option<u64>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "sharon.toml";

/// Load config with warnings for unknown keys.
///
/// Relative directories are resolved against the config file's directory.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut config = parse_with_warnings(&content, path)?;
    if let Some(base) = path.parent() {
        config.run.resolve_against(base);
    }
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown) = parse_collecting(content, path)?;
    for key in &unknown {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config and return the unknown keys alongside it.
fn parse_collecting(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown: Vec<String> = flexible.unknown.into_keys().collect();

    let run = match flexible.run {
        Some(run) => {
            unknown.extend(run.unknown.into_keys().map(|key| format!("run.{key}")));
            RunConfig {
                tests_dir: run.tests_dir,
                reports_dir: run.reports_dir,
                mocha_timeout_ms: run.mocha_timeout_ms,
            }
        }
        None => RunConfig::default(),
    };

    Ok((Config { version, run }, unknown))
}

impl RunConfig {
    fn resolve_against(&mut self, base: &Path) {
        for dir in [&mut self.tests_dir, &mut self.reports_dir]
            .into_iter()
            .flatten()
        {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unrecognized field `{}`", path.display(), key);
    eprintln!(
        "sharon: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
