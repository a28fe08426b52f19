//! Tree builder: walks a declarative composition into a metadata tree.
//!
//! One walk per build event produces two things at once: the cheap,
//! comparison-friendly [`Node`] forest the search engine consumes, and —
//! as a side effect — a registry entry per item so search results can be
//! rendered live later. Builds are deterministic: the same declarations
//! under the same caller state yield structurally equal forests with the
//! same ids in the same order, which is what lets a freshly rebuilt tree
//! keep identity continuity with the live-rendered hierarchy on every
//! keystroke.
//!
//! Building never fails for well-formed input. Conditional and repeated
//! branches that produce nothing simply contribute zero nodes.

use crate::compose::content::Content;
use crate::node::model::{GroupNode, ItemNode, Node, Presentation};
use crate::registry::FragmentRegistry;

/// Log target for build events.
pub const LOG_TARGET: &str = "prefpane::builder";

/// Walks [`Content`] into a [`Node`] forest, registering fragment factories
/// as it goes.
pub struct TreeBuilder<'a> {
    registry: &'a FragmentRegistry,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder that registers factories into `registry`.
    pub fn new(registry: &'a FragmentRegistry) -> Self {
        Self { registry }
    }

    /// Build the metadata forest for `content`.
    pub fn build(&self, content: &Content) -> Vec<Node> {
        let mut roots = Vec::new();
        self.build_into(content, &mut roots);
        tracing::debug!(
            target: LOG_TARGET,
            roots = roots.len(),
            registered = self.registry.len(),
            "built node forest"
        );
        roots
    }

    fn build_into(&self, content: &Content, out: &mut Vec<Node>) {
        match content {
            Content::Item(decl) => {
                let id = decl.identity();
                self.registry.register(id, decl.fragment.clone());
                out.push(Node::Item(ItemNode {
                    id,
                    title: decl.title.clone(),
                    icon: decl.icon.clone(),
                    tags: decl.tags.clone(),
                    searchable: decl.searchable,
                }));
            }
            Content::Group(decl) => {
                // Children first; an inline group needs them fully built
                // before it can splice.
                let mut children = Vec::new();
                for child in &decl.children {
                    self.build_into(child, &mut children);
                }
                match decl.presentation {
                    Presentation::Navigation => out.push(Node::Group(GroupNode {
                        id: decl.identity(),
                        title: decl.title.clone(),
                        icon: decl.icon.clone(),
                        tags: decl.tags.clone(),
                        presentation: Presentation::Navigation,
                        children,
                    })),
                    Presentation::Inline => {
                        // Splice the children into the parent's list, each
                        // re-tagged with the inline group's title and tags.
                        // Splicing unwinds level by level, so a child nested
                        // under several inline groups accumulates tags from
                        // every enclosing one.
                        for mut child in children {
                            retag(&mut child, &decl.title, &decl.tags);
                            out.push(child);
                        }
                    }
                }
            }
            Content::Sequence(list) | Content::Repeated(list) => {
                for child in list {
                    self.build_into(child, out);
                }
            }
            Content::Conditional(Some(inner)) => self.build_into(inner, out),
            Content::Conditional(None) => {}
        }
    }
}

/// Append an inline group's title and tags to a spliced child's tag set.
///
/// Ids never depend on tags, so re-tagging leaves identity untouched.
fn retag(node: &mut Node, inline_title: &str, inline_tags: &[String]) {
    let tags = match node {
        Node::Group(g) => &mut g.tags,
        Node::Item(i) => &mut i.tags,
    };
    tags.push(inline_title.to_owned());
    tags.extend(inline_tags.iter().cloned());
}
