//! ViewTreeProvider port - read-only access to saved views
//!
//! Stands in for the view store and its selectors. The domain only reads
//! from it.

use crate::domain::entities::ViewRecord;

/// Read model of saved views and the recycle bin
pub trait ViewTreeProvider {
    /// Live views and folders, flat
    fn views(&self) -> Vec<ViewRecord>;

    /// Archived views and folders, flat
    fn archived(&self) -> Vec<ViewRecord>;
}
