//! Node types: NodeId, Node, GroupNode, ItemNode, Presentation.
//!
//! Nodes are the metadata-only half of the dual representation: they carry
//! titles, icons, and tags for search and navigation, and deliberately no
//! renderable content. That keeps a full tree rebuild cheap enough to run on
//! every keystroke of a live search box, and makes trees safe to compare,
//! cache, and serialize. The live rendering path is reached separately,
//! through the [fragment registry](crate::registry::FragmentRegistry), joined
//! to this model by [`NodeId`].

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable, content-derived identifier for a node.
///
/// Derived from `(kind, title, icon, presentation)` by
/// [`node_id`](crate::node::identity::node_id), so the same declaration maps
/// to the same id across independent tree rebuilds. Copy, lightweight (u128).
///
/// Serializes as a 32-character lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u128);

impl NodeId {
    /// Construct from a raw 128-bit value.
    ///
    /// Mainly useful in tests; production ids come from
    /// [`node_id`](crate::node::identity::node_id).
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// The raw 128-bit value.
    pub const fn as_raw(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct NodeIdVisitor;

impl Visitor<'_> for NodeIdVisitor {
    type Value = NodeId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 32-character hex string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<NodeId, E> {
        u128::from_str_radix(value, 16)
            .map(NodeId)
            .map_err(|_| E::custom(format!("invalid node id: {value:?}")))
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NodeIdVisitor)
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// How a group presents its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// A distinct, separately-navigable screen.
    Navigation,
    /// Children are spliced directly into the parent's listing. Inline groups
    /// are transparent for navigation and search grouping, but their title
    /// and tags propagate onto the spliced children.
    Inline,
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A node in the metadata tree: either a group or an item.
///
/// The tree is a strict forest — items never have children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Group(GroupNode),
    Item(ItemNode),
}

/// Metadata for a group of settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    /// Stable content-derived identity.
    pub id: NodeId,
    /// Display title.
    pub title: String,
    /// Optional symbolic icon reference.
    pub icon: Option<String>,
    /// Search keywords. Matching ignores order; declaration order is kept
    /// for display stability.
    pub tags: Vec<String>,
    /// Navigation or inline presentation.
    pub presentation: Presentation,
    /// Ordered children.
    pub children: Vec<Node>,
}

/// Metadata for a single setting row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemNode {
    /// Stable content-derived identity.
    pub id: NodeId,
    /// Display title.
    pub title: String,
    /// Optional symbolic icon reference.
    pub icon: Option<String>,
    /// Search keywords.
    pub tags: Vec<String>,
    /// Whether this item participates in search indexing. Items that opt
    /// out still render normally.
    pub searchable: bool,
}

/// Empty slice constant for returning when a node has no children.
const NO_CHILDREN: &[Node] = &[];

impl Node {
    /// The node's stable identity.
    pub fn id(&self) -> NodeId {
        match self {
            Node::Group(g) => g.id,
            Node::Item(i) => i.id,
        }
    }

    /// The node's display title.
    pub fn title(&self) -> &str {
        match self {
            Node::Group(g) => &g.title,
            Node::Item(i) => &i.title,
        }
    }

    /// The node's icon reference, if any.
    pub fn icon(&self) -> Option<&str> {
        match self {
            Node::Group(g) => g.icon.as_deref(),
            Node::Item(i) => i.icon.as_deref(),
        }
    }

    /// The node's search tags.
    pub fn tags(&self) -> &[String] {
        match self {
            Node::Group(g) => &g.tags,
            Node::Item(i) => &i.tags,
        }
    }

    /// Whether this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    /// The node's children.
    ///
    /// Asking an item for children is a contract violation — this fires a
    /// debug assertion and returns an empty slice in release builds.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group(g) => &g.children,
            Node::Item(i) => {
                debug_assert!(false, "item {:?} has no children", i.title);
                NO_CHILDREN
            }
        }
    }

    /// Borrow as a group, or `None` for items.
    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            Node::Group(g) => Some(g),
            Node::Item(_) => None,
        }
    }

    /// Borrow as an item, or `None` for groups.
    pub fn as_item(&self) -> Option<&ItemNode> {
        match self {
            Node::Item(i) => Some(i),
            Node::Group(_) => None,
        }
    }
}

impl GroupNode {
    /// Whether every child is an item (a group with no children counts).
    ///
    /// Leaf groups are the unit the search engine surfaces whole: once a
    /// leaf group matches, all of its items are shown together.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| !child.is_group())
    }

    /// Iterate over the group's item children.
    pub fn item_children(&self) -> impl Iterator<Item = &ItemNode> {
        self.children.iter().filter_map(Node::as_item)
    }

    /// Iterate over the group's group children.
    pub fn group_children(&self) -> impl Iterator<Item = &GroupNode> {
        self.children.iter().filter_map(Node::as_group)
    }
}
