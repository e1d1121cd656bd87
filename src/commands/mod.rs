//! Command handlers, one per subcommand

mod add_folder;
mod browse;
mod drill;
mod recycle;
mod tree;

pub use add_folder::cmd_add_folder;
pub use browse::cmd_browse;
pub use drill::cmd_drill;
pub use recycle::cmd_recycle;
pub use tree::cmd_tree;
