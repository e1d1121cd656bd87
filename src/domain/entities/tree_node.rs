//! TreeNode entity - a node of the sidebar forest
//!
//! Nodes are either folders or leaf views. The same type carries flat lists
//! (recycle bin): a list is a forest whose nodes have no children.

use serde::{Deserialize, Serialize};

/// Which icon family a node uses.
///
/// Resolved against the node's expansion state through [`IconRule::glyph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRule {
    /// Live folder: open or closed depending on expansion
    Folder,
    /// Live view
    View,
    /// Folder sitting in the recycle bin
    ArchivedFolder,
    /// View sitting in the recycle bin
    ArchivedFile,
}

/// Concrete icon to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    FolderOpen,
    FolderClosed,
    Code,
    FolderOutline,
    File,
}

/// (rule, expanded) -> glyph
const ICON_TABLE: &[(IconRule, bool, Glyph)] = &[
    (IconRule::Folder, true, Glyph::FolderOpen),
    (IconRule::Folder, false, Glyph::FolderClosed),
    (IconRule::View, true, Glyph::Code),
    (IconRule::View, false, Glyph::Code),
    (IconRule::ArchivedFolder, true, Glyph::FolderOutline),
    (IconRule::ArchivedFolder, false, Glyph::FolderOutline),
    (IconRule::ArchivedFile, true, Glyph::File),
    (IconRule::ArchivedFile, false, Glyph::File),
];

impl IconRule {
    /// Live tree rule for a node type
    pub fn for_live(is_folder: bool) -> Self {
        if is_folder {
            IconRule::Folder
        } else {
            IconRule::View
        }
    }

    /// Recycle bin rule for a node type
    pub fn for_archived(is_folder: bool) -> Self {
        if is_folder {
            IconRule::ArchivedFolder
        } else {
            IconRule::ArchivedFile
        }
    }

    /// Look up the glyph for the given expansion state
    pub fn glyph(self, expanded: bool) -> Glyph {
        ICON_TABLE
            .iter()
            .find(|(rule, exp, _)| *rule == self && *exp == expanded)
            .map(|(_, _, glyph)| *glyph)
            .unwrap_or(Glyph::File)
    }
}

/// A node in the sidebar forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique identifier
    pub key: String,
    /// Display title; the search predicate matches against it
    pub title: String,
    /// Key of the parent node, `None` for roots
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub is_folder: bool,
    /// Ordered child nodes
    #[serde(default)]
    pub children: Vec<TreeNode>,
    /// Not interactive (e.g. deletion in progress)
    #[serde(default)]
    pub disabled: bool,
    /// Folder expansion state
    #[serde(default)]
    pub expanded: bool,
    pub icon: IconRule,
}

impl TreeNode {
    /// Create a leaf view node
    pub fn view(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            parent_id: None,
            is_folder: false,
            children: Vec::new(),
            disabled: false,
            expanded: false,
            icon: IconRule::View,
        }
    }

    /// Create an empty folder node
    pub fn folder(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            is_folder: true,
            icon: IconRule::Folder,
            ..Self::view(key, title)
        }
    }

    /// Add a child, setting its parent reference
    pub fn with_child(mut self, mut child: TreeNode) -> Self {
        child.parent_id = Some(self.key.clone());
        self.children.push(child);
        self
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Icon to draw for the current state
    pub fn glyph(&self) -> Glyph {
        self.icon.glyph(self.expanded)
    }

    /// Total number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_len).sum::<usize>()
    }

    /// Depth-first search for a node by key
    pub fn find(&self, key: &str) -> Option<&TreeNode> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }
}

/// Depth-first search for a node by key across a forest
pub fn find_in_forest<'a>(forest: &'a [TreeNode], key: &str) -> Option<&'a TreeNode> {
    forest.iter().find_map(|n| n.find(key))
}

/// Number of nodes in a forest
pub fn forest_len(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::subtree_len).sum()
}
