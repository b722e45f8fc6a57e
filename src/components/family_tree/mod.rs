//! Hierarchical family tree visualization component.
//!
//! Turns a flat list of people into a top-down tree on an HTML canvas:
//! - People who share a child are paired into one joint node
//! - Edges run from each joint node to the nodes holding its children
//! - Placement is delegated to a rank-based layout engine (dagre)
//! - The view supports pan, zoom and fit-to-view; nothing is editable
//!
//! # Example
//!
//! ```ignore
//! use family_tree_graph::{FamilyTreeCanvas, Gender, Person};
//!
//! let people = vec![
//!     Person::new(4, "Dan", Gender::Male).with_children([6]),
//!     Person::new(5, "Eve", Gender::Female).with_children([6]),
//!     Person::new(6, "Fay", Gender::Female).with_parents([4, 5]),
//! ];
//!
//! view! { <FamilyTreeCanvas data=Signal::stored(people) fullscreen=true /> }
//! ```

mod component;
pub mod config;
pub mod edges;
pub mod graph;
pub mod layout;
pub mod pairing;
mod render;
pub mod scale;
pub mod state;
pub mod theme;
mod types;

pub use component::FamilyTreeCanvas;
pub use config::{LayoutConfig, LayoutDirection, TreeConfig, ViewConfig};
pub use edges::FamilyEdge;
pub use graph::{FamilyGraph, PositionedNode, build_family_graph};
pub use layout::{DagreLayout, LayoutEngine, Point};
pub use pairing::{JointKey, JointNode, NodeKind};
pub use theme::Theme;
pub use types::{Gender, Person, PersonId, PersonSummary};
