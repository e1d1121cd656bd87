//! Sidebar Widget
//!
//! Interactive view of the saved-view tree and recycle bin with live search.
//!
//! # Module Structure
//!
//! - `menu` - cursor, search input and action handling over a `Sidebar`
//! - `render` - terminal rendering functions
//! - `input` - keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{InputMode, SidebarAction, SidebarMenu};
