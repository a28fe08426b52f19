//! Render tree: a slotmap-backed arena of mounted rows.
//!
//! One render pass produces one tree; trees are never mutated after a newer
//! pass replaces them. Rows hold the live fragment instances for their pass,
//! so dropping the tree drops the fragments with it.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::compose::fragment::Fragment;
use crate::node::model::NodeId;

new_key_type! {
    /// Identifier for a mounted row. Copy, lightweight (u64), scoped to one
    /// render pass — not to be confused with the content-derived [`NodeId`].
    pub struct RowId;
}

/// What a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// The top-level container of a render pass.
    Container,
    /// A group header with rows nested beneath it.
    Section,
    /// A single tappable row leading to another screen.
    NavigationLink,
    /// A live, interactive fragment row.
    Control,
    /// An inert title/icon row — the registry-miss fallback.
    Static,
}

/// Data for one mounted row.
pub struct RowData {
    /// The content-derived identity of the node this row was built from.
    pub node_id: NodeId,
    /// What the row represents.
    pub kind: RowKind,
    /// Display title.
    pub title: String,
    /// Optional icon reference.
    pub icon: Option<String>,
    /// The live fragment, for `Control` and `Static` rows.
    pub fragment: Option<Box<dyn Fragment>>,
}

impl RowData {
    /// Create a row without a fragment.
    pub fn new(node_id: NodeId, kind: RowKind, title: impl Into<String>) -> Self {
        Self {
            node_id,
            kind,
            title: title.into(),
            icon: None,
            fragment: None,
        }
    }

    /// Set the icon (builder).
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    /// Attach a live fragment (builder).
    pub fn with_fragment(mut self, fragment: Box<dyn Fragment>) -> Self {
        self.fragment = Some(fragment);
        self
    }

    /// The row's display line: the fragment's rendering when present,
    /// otherwise title/icon text.
    pub fn display_line(&self) -> String {
        match &self.fragment {
            Some(fragment) => fragment.render_line(),
            None => match &self.icon {
                Some(icon) => format!("[{icon}] {}", self.title),
                None => self.title.clone(),
            },
        }
    }
}

impl std::fmt::Debug for RowData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowData")
            .field("node_id", &self.node_id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("fragment", &self.fragment.is_some())
            .finish()
    }
}

/// The mounted row tree for one render pass.
///
/// All rows live in a single `SlotMap`; parent/child relationships are kept
/// in secondary maps so lookup is O(1).
pub struct RenderTree {
    rows: SlotMap<RowId, RowData>,
    children: SecondaryMap<RowId, Vec<RowId>>,
    parent: SecondaryMap<RowId, RowId>,
    root: Option<RowId>,
}

/// Empty slice constant for returning when a row has no children.
const NO_ROWS: &[RowId] = &[];

impl RenderTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            rows: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level row. The first insertion becomes the root.
    pub fn insert(&mut self, data: RowData) -> RowId {
        let id = self.rows.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a row as a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist.
    pub fn insert_child(&mut self, parent: RowId, data: RowData) -> RowId {
        debug_assert!(self.rows.contains_key(parent), "parent row does not exist");
        let id = self.rows.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Immutable access to a row.
    pub fn get(&self, id: RowId) -> Option<&RowData> {
        self.rows.get(id)
    }

    /// Mutable access to a row.
    pub fn get_mut(&mut self, id: RowId) -> Option<&mut RowData> {
        self.rows.get_mut(id)
    }

    /// The parent of a row, if it has one.
    pub fn parent(&self, id: RowId) -> Option<RowId> {
        self.parent.get(id).copied()
    }

    /// The children of a row, in insertion order.
    pub fn children(&self, id: RowId) -> &[RowId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(NO_ROWS)
    }

    /// Ancestors of a row, nearest first, excluding the row itself.
    pub fn ancestors(&self, id: RowId) -> Vec<RowId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// The root row, if any rows exist.
    pub fn root(&self) -> Option<RowId> {
        self.root
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the tree has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pre-order depth-first traversal from `start`.
    pub fn walk_depth_first(&self, start: RowId) -> Vec<RowId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.rows.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Find the first row (pre-order from the root) built from `node_id`.
    pub fn find_by_node(&self, node_id: NodeId) -> Option<RowId> {
        let root = self.root?;
        self.walk_depth_first(root)
            .into_iter()
            .find(|&row| self.rows[row].node_id == node_id)
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}
