//! ViewRecord - the flat read model of a saved view or folder
//!
//! This is what the view store hands out; the sidebar tree is built from it.

use serde::{Deserialize, Serialize};

/// A saved view or folder as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub is_folder: bool,
    /// User-defined sort position among siblings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
    /// Deletion in progress
    #[serde(default)]
    pub delete_loading: bool,
}

impl ViewRecord {
    pub fn view(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            is_folder: false,
            index: None,
            delete_loading: false,
        }
    }

    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_folder: true,
            ..Self::view(id, name)
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_index(mut self, index: f64) -> Self {
        self.index = Some(index);
        self
    }

    /// Parent id with empty strings treated as root
    pub fn parent_key(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }
}
