//! drilltree - saved-view sidebar and drill path tools
//!
//! Library side of the `drilltree` binary:
//!
//! - drill paths: which chart fields can be drilled into, and which level is
//!   active
//! - tree search: case-insensitive title filtering over the saved-view forest,
//!   debounced for live input
//! - insertion: where a new folder goes among its siblings

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DebouncedSearch, Debouncer, DrillBar, DrillPathView, Sidebar};
pub use config::Config;
pub use domain::entities::{ChartConfig, DrillState, FieldSpec, TreeNode, ViewRecord};
pub use domain::services::{compute_index, derive_path, filter_forest};
pub use error::{DrilltreeError, DrilltreeResult};
pub use infrastructure::{load_chart, JsonWorkspace};
