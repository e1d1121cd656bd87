//! FolderStore port - persistence capability for new folders

use crate::domain::entities::{FolderDraft, ViewRecord};
use crate::error::DrilltreeResult;

/// Persists folders created from the sidebar
pub trait FolderStore {
    /// Save a new folder and return the stored record
    fn save_folder(&mut self, draft: FolderDraft) -> DrilltreeResult<ViewRecord>;
}
