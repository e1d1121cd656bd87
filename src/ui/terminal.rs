//! Terminal capability detection
//!
//! The environment is read through a lookup closure so tests can supply
//! their own variables.

use is_terminal::IsTerminal;

/// Width assumed when the terminal size cannot be read
const FALLBACK_COLUMNS: u16 = 80;

/// Variables that mark a CI run
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "JENKINS_HOME",
];

/// Locale variables, most specific first
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    /// Columns; only meaningful on a tty
    pub width: u16,
}

impl TerminalCapabilities {
    /// Read stdout and the process environment
    pub fn detect() -> Self {
        let columns = crossterm::terminal::size().ok().map(|(cols, _)| cols);
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
            columns,
        )
    }

    pub(crate) fn from_env<E>(env: E, is_tty: bool, columns: Option<u16>) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        Self {
            is_tty,
            supports_color: is_tty && !dumb && env("NO_COLOR").is_none(),
            supports_unicode: !dumb && locale_allows_unicode(&env),
            is_ci: CI_VARS.iter().any(|var| env(var).is_some()),
            width: columns.unwrap_or(FALLBACK_COLUMNS),
        }
    }
}

/// The first locale variable that is set decides; C and POSIX mean ASCII
fn locale_allows_unicode<E>(env: &E) -> bool
where
    E: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .find_map(|var| env(var).filter(|value| !value.is_empty()))
        .map(|locale| {
            let locale = locale.to_lowercase();
            locale != "c" && locale != "posix"
        })
        .unwrap_or(true)
}
