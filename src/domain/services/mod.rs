//! Domain Services
//!
//! Pure functions over in-memory collections. No I/O, no timing.

mod drill_path;
mod insertion;
mod tree_builder;
mod tree_filter;

pub use drill_path::derive_path;
pub use insertion::{compute_index, insertion_context, siblings_of};
pub use tree_builder::{build_recycle_list, build_view_tree, sort_by_display_order};
pub use tree_filter::{
    expand_survivors, filter_by_title, filter_forest, filter_forest_with, title_matches,
    FilterOptions,
};
