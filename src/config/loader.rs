//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DrilltreeError, DrilltreeResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".drilltree.toml";

const KNOWN_KEYS: &[&str] = &[
    "search",
    "debounce_ms",
    "keep_matched_subtree",
    "auto_expand",
    "output",
    "verbosity",
    "color",
    "unicode",
    "sidebar",
    "start_folded",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DrilltreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DrilltreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: project, then user
pub fn find_config_file(project_root: Option<&Path>, user_dir: Option<&Path>) -> Option<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = user_dir.map(|dir| dir.join("drilltree").join("config.toml"));
    project.into_iter().chain(user).find(|p| p.exists())
}

/// Load from project config, user config, or defaults, then apply env
///
/// A config file that fails to parse is reported and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let user_dir = dirs::config_dir();
    let (config, warnings) = match find_config_file(project_root, user_dir.as_deref()) {
        Some(path) => match load_with_warnings(&path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Warning: {}; using defaults", e);
                (Config::default(), Vec::new())
            }
        },
        None => (Config::default(), Vec::new()),
    };
    (config.with_env_overrides(), warnings)
}

/// Apply environment variable overrides (DRILLTREE_* prefix)
pub fn with_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ms) = get_env("DRILLTREE_DEBOUNCE_MS") {
        config.search.debounce_ms = EnvVarValidator::new("DRILLTREE_DEBOUNCE_MS", &["<milliseconds>"])
            .parse(&ms, |s| s.parse::<u64>().ok(), config.search.debounce_ms);
    }

    if let Some(verbosity) = get_env("DRILLTREE_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new("DRILLTREE_VERBOSITY", Verbosity::NAMES)
            .parse(&verbosity, Verbosity::parse, config.output.verbosity);
    }

    if let Some(unicode) = get_env("DRILLTREE_UNICODE") {
        config.output.unicode = EnvVarValidator::new("DRILLTREE_UNICODE", &["true", "false", "1", "0"])
            .parse(&unicode, parse_flag, config.output.unicode);
    }

    config
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
