//! Insertion of new nodes into the view tree

use serde::{Deserialize, Serialize};

use super::view_record::ViewRecord;

/// Transient input of an add operation.
///
/// `existing_siblings` must be in display order: the position returned by the
/// calculator is an index into this sequence.
#[derive(Debug, Clone, Default)]
pub struct InsertionContext {
    pub declared_parent_id: Option<String>,
    pub existing_siblings: Vec<ViewRecord>,
    /// Explicit position requested by the user
    pub position_hint: Option<usize>,
}

impl InsertionContext {
    pub fn new(declared_parent_id: Option<String>, existing_siblings: Vec<ViewRecord>) -> Self {
        Self {
            declared_parent_id,
            existing_siblings,
            position_hint: None,
        }
    }

    pub fn with_position_hint(mut self, hint: usize) -> Self {
        self.position_hint = Some(hint);
        self
    }
}

/// Argument of the folder-save capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDraft {
    pub name: String,
    pub parent_id: Option<String>,
    pub index: usize,
}

impl FolderDraft {
    /// Build a draft, normalising an empty parent id to root
    pub fn new(name: impl Into<String>, parent_id: Option<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            parent_id: parent_id.filter(|p| !p.is_empty()),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_draft_normalises_empty_parent() {
        let draft = FolderDraft::new("Reports", Some(String::new()), 0);
        assert_eq!(draft.parent_id, None);
    }

    #[test]
    fn folder_draft_serializes_camel_case() {
        let draft = FolderDraft::new("Reports", Some("p1".to_string()), 2);
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"name":"Reports","parentId":"p1","index":2}"#);
    }
}
