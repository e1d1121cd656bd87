//! SidebarMenu state management and action handling.

use std::time::{Duration, Instant};

use drilltree::application::{Pane, Sidebar, SidebarCommand, SidebarEffect};
use drilltree::domain::entities::TreeNode;
use drilltree::domain::ports::{FolderStore, ViewTreeProvider};
use drilltree::DrilltreeResult;

use crate::ui::views::tree::{visible_rows, TreeRow};

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Navigate,
    Search,
    /// Typing the name of a new folder
    FolderName,
}

/// Sidebar menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Expand or collapse the folder under the cursor
    Toggle,
    /// Run a menu item (`view`, `recycle`, `back`, `fold`)
    Menu(&'static str),
    /// Focus the search box
    StartSearch,
    /// Start naming a new folder next to the cursor
    StartFolder,
    /// Type into the focused input
    Type(char),
    /// Delete the last input character
    Erase,
    /// Leave the focused input; a folder name being typed is discarded
    EndSearch,
    /// Confirm the focused input
    Submit,
    /// Quit
    Quit,
}

/// Cursor and search input over a [`Sidebar`]
pub struct SidebarMenu<W>
where
    W: ViewTreeProvider + FolderStore,
{
    sidebar: Sidebar<W>,
    cursor: usize,
    mode: InputMode,
    list_input: String,
    recycle_input: String,
    folder_name: String,
    folder_parent: Option<String>,
    status: Option<String>,
}

impl<W> SidebarMenu<W>
where
    W: ViewTreeProvider + FolderStore,
{
    pub fn new(sidebar: Sidebar<W>) -> Self {
        Self {
            sidebar,
            cursor: 0,
            mode: InputMode::Navigate,
            list_input: String::new(),
            recycle_input: String::new(),
            folder_name: String::new(),
            folder_parent: None,
            status: None,
        }
    }

    pub fn sidebar(&self) -> &Sidebar<W> {
        &self.sidebar
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Text typed into the active pane's search box (may not be applied yet)
    pub fn input(&self) -> &str {
        match self.sidebar.pane() {
            Pane::List => &self.list_input,
            Pane::Recycle => &self.recycle_input,
        }
    }

    /// Name typed so far for the new folder
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Rows of the visible pane; nothing while folded
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        if self.sidebar.is_folded() {
            return Vec::new();
        }
        visible_rows(self.sidebar.visible(), false)
    }

    fn current_node(&self) -> Option<&TreeNode> {
        self.rows().get(self.cursor).map(|row| row.node)
    }

    /// Handle an action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: SidebarAction, now: Instant) -> DrilltreeResult<bool> {
        match action {
            SidebarAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            SidebarAction::Down => {
                if self.cursor + 1 < self.rows().len() {
                    self.cursor += 1;
                }
            }
            SidebarAction::Toggle => {
                let key = self
                    .current_node()
                    .filter(|node| node.is_folder && self.sidebar.pane() == Pane::List)
                    .map(|node| node.key.clone());
                if let Some(key) = key {
                    self.dispatch(SidebarCommand::ToggleFolder(key), now)?;
                }
            }
            SidebarAction::Menu(key) => {
                if let Some(command) = SidebarCommand::from_menu_key(key) {
                    self.dispatch(command, now)?;
                }
            }
            SidebarAction::StartSearch => self.mode = InputMode::Search,
            SidebarAction::StartFolder => self.start_folder(),
            SidebarAction::EndSearch => self.end_input(),
            SidebarAction::Submit => {
                if self.mode == InputMode::FolderName {
                    self.submit_folder(now)?;
                }
                self.end_input();
            }
            SidebarAction::Type(c) if self.mode == InputMode::FolderName => {
                self.folder_name.push(c);
            }
            SidebarAction::Erase if self.mode == InputMode::FolderName => {
                self.folder_name.pop();
            }
            SidebarAction::Type(c) => {
                self.input_mut().push(c);
                self.search(now)?;
            }
            SidebarAction::Erase => {
                if self.input_mut().pop().is_some() {
                    self.search(now)?;
                }
            }
            SidebarAction::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Apply settled searches. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.sidebar.tick(now);
        if changed {
            self.clamp_cursor();
        }
        changed
    }

    /// Time until the next pending search settles
    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        self.sidebar.next_due(now)
    }

    /// Cancel pending searches
    pub fn close(&mut self) {
        self.sidebar.unmount();
    }

    /// New folders go inside the folder under the cursor, or next to the view
    fn start_folder(&mut self) {
        if self.sidebar.pane() != Pane::List || self.sidebar.is_folded() {
            return;
        }
        self.folder_parent = self.current_node().and_then(|node| {
            if node.is_folder {
                Some(node.key.clone())
            } else {
                node.parent_id.clone()
            }
        });
        self.folder_name.clear();
        self.mode = InputMode::FolderName;
    }

    fn submit_folder(&mut self, now: Instant) -> DrilltreeResult<()> {
        let command = SidebarCommand::AddFolder {
            name: std::mem::take(&mut self.folder_name),
            parent_id: self.folder_parent.take(),
            position: None,
        };
        self.dispatch(command, now)
    }

    fn end_input(&mut self) {
        self.folder_name.clear();
        self.folder_parent = None;
        self.mode = InputMode::Navigate;
    }

    fn search(&mut self, now: Instant) -> DrilltreeResult<()> {
        let text = self.input().to_string();
        self.dispatch(SidebarCommand::Search(text), now)
    }

    fn dispatch(&mut self, command: SidebarCommand, now: Instant) -> DrilltreeResult<()> {
        let effect = self.sidebar.dispatch(command, now)?;
        self.status = match effect {
            SidebarEffect::NewView => Some("new view requested".to_string()),
            SidebarEffect::FolderSaved { folder } => {
                Some(format!("created folder '{}'", folder.name))
            }
            SidebarEffect::PaneChanged { .. } => {
                self.cursor = 0;
                None
            }
            SidebarEffect::Folded { folded: true } => Some("sidebar folded".to_string()),
            _ => None,
        };
        self.clamp_cursor();
        Ok(())
    }

    fn input_mut(&mut self) -> &mut String {
        match self.sidebar.pane() {
            Pane::List => &mut self.list_input,
            Pane::Recycle => &mut self.recycle_input,
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
