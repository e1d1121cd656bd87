//! Sidebar: saved-view tree, recycle bin, search and commands
//!
//! The sidebar pulls records from a [`ViewTreeProvider`], builds the live tree
//! and the recycle list, and keeps one debounced search per pane. Commands
//! come in as [`SidebarCommand`] values; persistence goes through
//! [`FolderStore`].
//!
//! [`ViewTreeProvider`]: crate::domain::ports::ViewTreeProvider
//! [`FolderStore`]: crate::domain::ports::FolderStore

mod command;
mod state;

pub use command::{Pane, SidebarCommand, SidebarEffect};
pub use state::{Sidebar, SidebarOptions};
