// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` flag → no color
//! 2. `--color` flag → use color
//! 3. NO_COLOR env var → no color
//! 4. COLOR env var → use color
//! 5. default: color only when stdout is a TTY

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice from flags and environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty string) disables color.
pub fn resolve_color(no_color: bool, force: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    choice_from_env(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn choice_from_env(no_color: bool, color: bool, is_tty: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if color {
        ColorChoice::Always
    } else if is_tty {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color scheme for console output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold heading (summary title, banners).
    pub fn heading() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Bold phase header in the phase's own color.
    pub fn phase(color: Color) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        spec
    }

    /// Green passing category.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red failing category.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow skipped category.
    pub fn skip() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Yellow warning prefix.
    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Dimmed secondary text.
    pub fn muted() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line number.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Red for the actual side of a diff.
    pub fn diff_remove() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }

    /// Green for the expected side of a diff.
    pub fn diff_add() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
