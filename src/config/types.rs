//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::search::DEFAULT_DEBOUNCE_MS;
use crate::application::sidebar::SidebarOptions;
use crate::domain::services::FilterOptions;
use crate::error::DrilltreeResult;

use super::loader::{self, ConfigWarning};

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Keep the whole subtree under a matching folder
    #[serde(default)]
    pub keep_matched_subtree: bool,

    /// Expand folders that contain hits
    #[serde(default = "default_true")]
    pub auto_expand: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            keep_matched_subtree: false,
            auto_expand: true,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Sidebar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SidebarConfig {
    #[serde(default)]
    pub start_folded: bool,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Combine with the `-v` count from the command line; the louder wins
    pub fn with_flag_count(self, count: u8) -> Self {
        let from_flags = match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        };
        if count == 0 {
            self
        } else {
            self.max(from_flags)
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DrilltreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> DrilltreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DRILLTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Options for the sidebar and its searches
    pub fn sidebar_options(&self) -> SidebarOptions {
        SidebarOptions {
            debounce: self.search.debounce(),
            start_folded: self.sidebar.start_folded,
            filter: FilterOptions {
                keep_matched_subtree: self.search.keep_matched_subtree,
            },
            auto_expand: self.search.auto_expand,
        }
    }
}
