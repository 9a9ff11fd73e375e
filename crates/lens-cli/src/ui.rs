//! Terminal preferences resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    /// Colour status cells in tables.
    pub color: bool,
    /// Show spinners on stderr.
    pub progress: bool,
    /// Usable width for tables, from `COLUMNS`.
    pub width: Option<usize>,
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

/// Preferences set by [`init`], or plain output when never initialised.
#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}

fn resolve(
    flags: &GlobalFlags,
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> UiPrefs {
    UiPrefs {
        color: stdout_tty && !no_color && flags.format == OutputFormat::Table,
        progress: stderr_tty && !flags.quiet,
        width: columns
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40),
    }
}
