//! UI components.

pub mod family_tree;
