// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Category registry.
//!
//! The ordered list of phases and the categories each one runs. Pure
//! static data: nothing here touches the filesystem.

use std::path::PathBuf;

use serde::Serialize;
use termcolor::Color;

/// Identifies a phase on the command line (`--phase`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    /// Core protocol validation.
    Protocol,
    /// Individual microservice tests.
    Service,
    /// Cross-service integration tests.
    System,
    /// MAGIC spell files, one per service. Opt-in only.
    Magic,
}

impl PhaseKind {
    /// Phases that run when no `--phase` flag is given.
    pub const DEFAULT: &'static [PhaseKind] =
        &[PhaseKind::Protocol, PhaseKind::Service, PhaseKind::System];
}

/// One independently runnable slice of tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCategory {
    pub name: String,
    /// Display name of the owning phase.
    pub group_name: String,
    /// Directory or file, relative to the tests root.
    pub relative_path: PathBuf,
}

impl TestCategory {
    pub fn new(
        name: impl Into<String>,
        group_name: impl Into<String>,
        relative_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            group_name: group_name.into(),
            relative_path: relative_path.into(),
        }
    }
}

/// An ordered group of categories run under one heading.
#[derive(Debug, Clone)]
pub struct Phase {
    pub kind: PhaseKind,
    pub name: String,
    pub description: String,
    /// Heading color for console output.
    pub color: Color,
    pub categories: Vec<TestCategory>,
}

impl Phase {
    /// Build a phase whose categories are directories named after each entry.
    fn of_dirs(
        kind: PhaseKind,
        name: &str,
        description: &str,
        color: Color,
        dirs: &[&str],
    ) -> Self {
        let categories = dirs
            .iter()
            .map(|dir| TestCategory::new(*dir, name, *dir))
            .collect();
        Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            color,
            categories,
        }
    }
}

const PROTOCOL_CATEGORIES: &[&str] = &["sessionless", "magic", "teleportation"];

const SERVICE_CATEGORIES: &[&str] = &[
    "fount",
    "bdo",
    "julia",
    "addie",
    "sanora",
    "dolores",
    "covenant",
    "continuebee",
    "joan",
    "pn-pref",
    "aretha",
];

const SYSTEM_CATEGORIES: &[&str] = &["permissions", "cross-service", "client-server"];

/// (service, spell file relative to the tests root)
const SPELL_FILES: &[(&str, &str)] = &[
    ("joan", "joan/magic-spells.js"),
    ("pref", "pref/magic-spells.js"),
    ("aretha", "aretha/magic-spells.js"),
    ("continuebee", "continuebee/magic-spells.js"),
    ("bdo", "bdo/magic-spells.js"),
    ("julia", "julia/magic-spells.js"),
    ("dolores", "dolores/magic-spells.js"),
    ("sanora", "sanora/magic-spells.js"),
    ("addie", "addie/magic-spells.js"),
    ("covenant", "covenant/magic-spells.js"),
    ("prof", "prof/magic-spells.js"),
    ("fount", "fount/mocha/magic-spells.js"),
];

/// All phases in run order.
pub fn list_phases() -> Vec<Phase> {
    let magic_name = "MAGIC Spell Tests";
    vec![
        Phase::of_dirs(
            PhaseKind::Protocol,
            "Protocol Tests",
            "Core protocol validation",
            Color::Cyan,
            PROTOCOL_CATEGORIES,
        ),
        Phase::of_dirs(
            PhaseKind::Service,
            "Service Tests",
            "Individual microservice tests",
            Color::Blue,
            SERVICE_CATEGORIES,
        ),
        Phase::of_dirs(
            PhaseKind::System,
            "System Tests",
            "Cross-service integration tests",
            Color::Magenta,
            SYSTEM_CATEGORIES,
        ),
        Phase {
            kind: PhaseKind::Magic,
            name: magic_name.to_string(),
            description: "MAGIC spell routes per service".to_string(),
            color: Color::Yellow,
            categories: SPELL_FILES
                .iter()
                .map(|(service, file)| TestCategory::new(*service, magic_name, *file))
                .collect(),
        },
    ]
}

/// Phases to run for a `--phase` selection, in registry order.
///
/// An empty selection means [`PhaseKind::DEFAULT`].
pub fn select_phases(selection: &[PhaseKind]) -> Vec<Phase> {
    let wanted = if selection.is_empty() {
        PhaseKind::DEFAULT
    } else {
        selection
    };
    list_phases()
        .into_iter()
        .filter(|phase| wanted.contains(&phase.kind))
        .collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
