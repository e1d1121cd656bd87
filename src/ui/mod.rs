//! Terminal UI: design tokens, capability detection and renderers

pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
