//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod chart;
mod workspace;

pub use chart::{load_chart, ChartFile};
pub use workspace::{JsonWorkspace, WorkspaceData};
