//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Chart fields, tree nodes, view records, insertion inputs
//! - `services/` - Drill path derivation, tree filtering, tree building, insertion index
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
