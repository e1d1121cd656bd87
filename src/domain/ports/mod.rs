//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod folder_store;
pub mod view_provider;

pub use folder_store::FolderStore;
pub use view_provider::ViewTreeProvider;
