pub mod drill;
pub mod tree;
