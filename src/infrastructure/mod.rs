//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON workspace (views + recycle bin) and chart configs

pub mod repositories;

// Re-export for convenience
pub use repositories::{load_chart, ChartFile, JsonWorkspace, WorkspaceData};
