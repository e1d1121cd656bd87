//! Error types for drilltree
//!
//! The domain services are infallible; these errors only come from the edges
//! (workspace files, chart files, config, prompts).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for drilltree operations
pub type DrilltreeResult<T> = Result<T, DrilltreeError>;

/// Main error type for drilltree operations
#[derive(Error, Debug)]
pub enum DrilltreeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Workspace file does not exist
    #[error("workspace not found: {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// Chart file does not exist
    #[error("chart config not found: {path}")]
    ChartNotFound { path: PathBuf },

    /// Interactive prompt failed or was aborted
    #[error("prompt failed: {0}")]
    Prompt(String),
}
