//! Sidebar commands and their outcomes

use serde::Serialize;

use crate::domain::entities::ViewRecord;

/// Which pane the sidebar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    /// Live view tree
    #[default]
    List,
    /// Recycle bin
    Recycle,
}

/// User intent dispatched by the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarCommand {
    /// `view`: start a new unsaved view
    AddView,
    /// `folder`: submit the add-folder form
    AddFolder {
        name: String,
        parent_id: Option<String>,
        position: Option<usize>,
    },
    /// `recycle`: open the recycle bin
    Recycle,
    /// Leave the recycle bin
    Back,
    /// `fold`: collapse or reveal the sidebar
    Fold,
    /// Raw search input for the active pane
    Search(String),
    /// Expand or collapse a folder of the view tree
    ToggleFolder(String),
}

impl SidebarCommand {
    /// Map a menu item key to a command that needs no further input.
    ///
    /// `folder` needs the form values and is not handled here.
    pub fn from_menu_key(key: &str) -> Option<Self> {
        match key {
            "view" => Some(SidebarCommand::AddView),
            "recycle" => Some(SidebarCommand::Recycle),
            "fold" => Some(SidebarCommand::Fold),
            "back" => Some(SidebarCommand::Back),
            _ => None,
        }
    }
}

/// What dispatching a command did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SidebarEffect {
    /// The owner should open an unsaved view
    NewView,
    /// A folder was persisted
    FolderSaved { folder: ViewRecord },
    /// The visible pane changed
    PaneChanged { pane: Pane },
    /// The sidebar was folded (`true`) or revealed
    Folded { folded: bool },
    /// Search input was queued behind the debounce
    SearchScheduled,
    /// A folder was expanded or collapsed
    FolderToggled { key: String, expanded: bool },
    /// Nothing changed
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_map_to_commands() {
        assert_eq!(
            SidebarCommand::from_menu_key("view"),
            Some(SidebarCommand::AddView)
        );
        assert_eq!(
            SidebarCommand::from_menu_key("recycle"),
            Some(SidebarCommand::Recycle)
        );
        assert_eq!(
            SidebarCommand::from_menu_key("fold"),
            Some(SidebarCommand::Fold)
        );
        assert_eq!(SidebarCommand::from_menu_key("folder"), None);
        assert_eq!(SidebarCommand::from_menu_key("nope"), None);
    }

    #[test]
    fn effect_serializes_tagged() {
        let json = serde_json::to_string(&SidebarEffect::PaneChanged {
            pane: Pane::Recycle,
        })
        .unwrap();
        assert_eq!(json, r#"{"effect":"pane_changed","pane":"recycle"}"#);
    }
}
