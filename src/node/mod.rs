//! Metadata node model: Node/Group/Item, stable identity, parent map.

pub mod identity;
pub mod model;
pub mod parent_map;

pub use identity::{node_id, NodeKind};
pub use model::{GroupNode, ItemNode, Node, NodeId, Presentation};
pub use parent_map::ParentMap;
