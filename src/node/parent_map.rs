//! Parent map: derived child-to-parent index over a node forest.
//!
//! Built on demand from the current tree and thrown away with it. Used to
//! walk ancestors when a search result's id has to be resolved back to its
//! subtree for navigation.

use std::collections::HashMap;

use crate::node::model::{GroupNode, Node, NodeId};

/// Transient `child id -> parent id` map over a `&[Node]` forest.
///
/// Roots have no entry. When duplicate ids exist in the tree (the documented
/// identity-collision case) the first occurrence in traversal order wins.
#[derive(Debug, Default)]
pub struct ParentMap {
    parents: HashMap<NodeId, NodeId>,
}

impl ParentMap {
    /// Build the map from a forest of root nodes.
    pub fn build(roots: &[Node]) -> Self {
        let mut map = Self::default();
        for root in roots {
            map.index(root);
        }
        map
    }

    fn index(&mut self, node: &Node) {
        if let Node::Group(group) = node {
            for child in &group.children {
                self.parents.entry(child.id()).or_insert(group.id);
                self.index(child);
            }
        }
    }

    /// The parent of `id`, or `None` for roots and unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            result.push(parent);
            current = parent;
        }
        result
    }

    /// Path from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = self.ancestors_of(id);
        path.reverse();
        path.push(id);
        path
    }

    /// Number of child-to-parent edges.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the map holds no edges.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Find the group with the given id anywhere in a forest.
///
/// Depth-first, declaration order; the first occurrence wins on duplicate
/// ids.
pub fn find_group(roots: &[Node], id: NodeId) -> Option<&GroupNode> {
    for node in roots {
        if let Node::Group(group) = node {
            if group.id == id {
                return Some(group);
            }
            if let Some(found) = find_group(&group.children, id) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::identity::{node_id, NodeKind};
    use crate::node::model::{ItemNode, Presentation};

    fn group(title: &str, children: Vec<Node>) -> Node {
        Node::Group(GroupNode {
            id: node_id(NodeKind::Group, title, None, Some(Presentation::Navigation)),
            title: title.to_owned(),
            icon: None,
            tags: Vec::new(),
            presentation: Presentation::Navigation,
            children,
        })
    }

    fn item(title: &str) -> Node {
        Node::Item(ItemNode {
            id: node_id(NodeKind::Item, title, None, None),
            title: title.to_owned(),
            icon: None,
            tags: Vec::new(),
            searchable: true,
        })
    }

    fn id_of(node: &Node) -> NodeId {
        node.id()
    }

    /// Forest:
    /// ```text
    ///   root
    ///   ├── a
    ///   │   └── leaf (item)
    ///   └── b
    /// ```
    fn build_forest() -> (Vec<Node>, NodeId, NodeId, NodeId, NodeId) {
        let leaf = item("leaf");
        let leaf_id = id_of(&leaf);
        let a = group("a", vec![leaf]);
        let a_id = id_of(&a);
        let b = group("b", Vec::new());
        let b_id = id_of(&b);
        let root = group("root", vec![a, b]);
        let root_id = id_of(&root);
        (vec![root], root_id, a_id, b_id, leaf_id)
    }

    #[test]
    fn parents_are_indexed() {
        let (forest, root_id, a_id, b_id, leaf_id) = build_forest();
        let map = ParentMap::build(&forest);
        assert_eq!(map.parent_of(a_id), Some(root_id));
        assert_eq!(map.parent_of(b_id), Some(root_id));
        assert_eq!(map.parent_of(leaf_id), Some(a_id));
        assert_eq!(map.parent_of(root_id), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn ancestors_nearest_first() {
        let (forest, root_id, a_id, _b_id, leaf_id) = build_forest();
        let map = ParentMap::build(&forest);
        assert_eq!(map.ancestors_of(leaf_id), vec![a_id, root_id]);
        assert!(map.ancestors_of(root_id).is_empty());
    }

    #[test]
    fn path_is_root_first_and_inclusive() {
        let (forest, root_id, a_id, _b_id, leaf_id) = build_forest();
        let map = ParentMap::build(&forest);
        assert_eq!(map.path_to(leaf_id), vec![root_id, a_id, leaf_id]);
    }

    #[test]
    fn empty_forest() {
        let map = ParentMap::build(&[]);
        assert!(map.is_empty());
        assert!(map.ancestors_of(NodeId::from_raw(1)).is_empty());
    }

    #[test]
    fn find_group_by_id() {
        let (forest, _root_id, a_id, _b_id, leaf_id) = build_forest();
        let found = find_group(&forest, a_id).unwrap();
        assert_eq!(found.title, "a");
        // Items are never found as groups.
        assert!(find_group(&forest, leaf_id).is_none());
        assert!(find_group(&forest, NodeId::from_raw(0)).is_none());
    }

    #[test]
    fn duplicate_ids_first_occurrence_wins() {
        // Two sibling groups with the same declaration collide on id; the
        // map keeps the first parent edge it sees.
        let root = group("root", vec![group("dup", Vec::new()), group("dup", Vec::new())]);
        let forest = vec![root];
        let map = ParentMap::build(&forest);
        // Only one edge for the duplicated id plus none for root.
        assert_eq!(map.len(), 1);
    }
}
