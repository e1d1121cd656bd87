//! Configuration
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DRILLTREE_*)
//! 3. Project config (.drilltree.toml)
//! 4. User config (<config dir>/drilltree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, SearchConfig, SidebarConfig, Verbosity};
