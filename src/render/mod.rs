//! Rendering: the row arena and the coordinator that fills it.

pub mod coordinator;
pub mod tree;

pub use coordinator::{RenderCoordinator, RenderOutput};
pub use tree::{RenderTree, RowData, RowId, RowKind};
