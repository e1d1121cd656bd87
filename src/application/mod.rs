//! Application Layer
//!
//! Stateful components that sit between the pure domain services and the
//! terminal front end.
//!
//! - `drill` - drill path view model and selection callback
//! - `search` - debounce timer and debounced forest search
//! - `sidebar` - view tree + recycle bin with commands

pub mod drill;
pub mod search;
pub mod sidebar;

pub use drill::{DrillBar, DrillItem, DrillPathView, DrillSegment};
pub use search::{DebouncedSearch, Debouncer, TitlePredicate, DEFAULT_DEBOUNCE_MS};
pub use sidebar::{Pane, Sidebar, SidebarCommand, SidebarEffect, SidebarOptions};
