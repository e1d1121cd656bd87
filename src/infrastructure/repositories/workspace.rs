//! JSON Workspace Repository
//!
//! A workspace file holds the saved views and the recycle bin:
//!
//! ```json
//! { "views": [ { "id": "1", "name": "Sales", "isFolder": true } ], "archived": [] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{FolderDraft, ViewRecord};
use crate::domain::ports::{FolderStore, ViewTreeProvider};
use crate::domain::services::{siblings_of, sort_by_display_order};
use crate::error::{DrilltreeError, DrilltreeResult};

/// In-memory workspace contents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceData {
    #[serde(default)]
    pub views: Vec<ViewRecord>,
    #[serde(default)]
    pub archived: Vec<ViewRecord>,
}

impl WorkspaceData {
    pub fn new(views: Vec<ViewRecord>, archived: Vec<ViewRecord>) -> Self {
        Self { views, archived }
    }

    /// Insert a folder at `draft.index` among its siblings.
    ///
    /// Siblings are renumbered `0..n` in display order so the stored `index`
    /// values match the position the folder was inserted at.
    pub fn insert_folder(&mut self, draft: FolderDraft) -> ViewRecord {
        let id = self.next_folder_id();
        let parent = draft.parent_id.as_deref();

        let mut siblings = siblings_of(parent, &self.views);
        sort_by_display_order(&mut siblings);
        let mut order: Vec<String> = siblings.into_iter().map(|r| r.id).collect();
        let position = draft.index.min(order.len());
        order.insert(position, id.clone());

        for (i, sibling_id) in order.iter().enumerate() {
            if let Some(record) = self.views.iter_mut().find(|r| &r.id == sibling_id) {
                record.index = Some(i as f64);
            }
        }

        let folder = ViewRecord {
            id,
            name: draft.name,
            parent_id: draft.parent_id,
            is_folder: true,
            index: Some(position as f64),
            delete_loading: false,
        };
        self.views.push(folder.clone());
        folder
    }

    fn next_folder_id(&self) -> String {
        let taken = |id: &str| {
            self.views
                .iter()
                .chain(self.archived.iter())
                .any(|r| r.id == id)
        };
        let mut n = self.views.len() + self.archived.len() + 1;
        loop {
            let candidate = format!("folder-{}", n);
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl ViewTreeProvider for WorkspaceData {
    fn views(&self) -> Vec<ViewRecord> {
        self.views.clone()
    }

    fn archived(&self) -> Vec<ViewRecord> {
        self.archived.clone()
    }
}

impl FolderStore for WorkspaceData {
    fn save_folder(&mut self, draft: FolderDraft) -> DrilltreeResult<ViewRecord> {
        Ok(self.insert_folder(draft))
    }
}

/// Workspace backed by a JSON file; folder saves are written through
pub struct JsonWorkspace {
    path: PathBuf,
    data: WorkspaceData,
}

impl JsonWorkspace {
    /// Load a workspace file
    pub fn load(path: &Path) -> DrilltreeResult<Self> {
        if !path.exists() {
            return Err(DrilltreeError::WorkspaceNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let data: WorkspaceData = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            views = data.views.len(),
            archived = data.archived.len(),
            "workspace loaded"
        );
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Wrap existing data; nothing is written until a save
    pub fn with_data(path: PathBuf, data: WorkspaceData) -> Self {
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &WorkspaceData {
        &self.data
    }

    /// Write the workspace atomically (temp file + rename)
    pub fn save(&self) -> DrilltreeResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "workspace saved");
        Ok(())
    }
}

impl ViewTreeProvider for JsonWorkspace {
    fn views(&self) -> Vec<ViewRecord> {
        self.data.views()
    }

    fn archived(&self) -> Vec<ViewRecord> {
        self.data.archived()
    }
}

impl FolderStore for JsonWorkspace {
    fn save_folder(&mut self, draft: FolderDraft) -> DrilltreeResult<ViewRecord> {
        let folder = self.data.insert_folder(draft);
        self.save()?;
        Ok(folder)
    }
}
