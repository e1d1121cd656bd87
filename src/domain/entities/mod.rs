//! Domain Entities
//!
//! - `FieldSpec` / `ChartConfig` - chart field configuration
//! - `DrillState` - active drill level
//! - `TreeNode` - sidebar forest node
//! - `ViewRecord` - flat stored view/folder
//! - `InsertionContext` / `FolderDraft` - add-folder inputs

mod drill_state;
mod field;
mod insertion;
mod tree_node;
mod view_record;

pub use drill_state::DrillState;
pub use field::{ChartConfig, ChartDataSection, FieldCategory, FieldSpec, SectionKind};
pub use insertion::{FolderDraft, InsertionContext};
pub use tree_node::{find_in_forest, forest_len, Glyph, IconRule, TreeNode};
pub use view_record::ViewRecord;
