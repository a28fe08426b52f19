//! Render coordinator: picks the rendering path for a display context.
//!
//! Normal navigation renders the live authored hierarchy directly — full
//! state-binding fidelity, registry untouched. Search results render from
//! node metadata, resolving each matched item through the registry for a
//! fresh live fragment (a cached fragment would desynchronize the moment its
//! value changes elsewhere), and degrading to an inert title/icon row on a
//! registry miss.

use crate::compose::content::Content;
use crate::fragments::StaticRow;
use crate::node::model::{GroupNode, ItemNode, Node, NodeId};
use crate::node::parent_map::{find_group, ParentMap};
use crate::registry::FragmentRegistry;
use crate::render::tree::{RenderTree, RowData, RowId, RowKind};
use crate::search::engine::{search_outcome, DefaultSearchEngine, SearchEngine, SearchOutcome, SearchResult};

/// Log target for render events.
pub const LOG_TARGET: &str = "prefpane::render";

/// What one display pass produced.
pub enum RenderOutput {
    /// Search inactive: the normal hierarchy.
    Normal(RenderTree),
    /// A non-empty query matched nothing — present "no results for X".
    NoMatches {
        /// The query as typed.
        query: String,
    },
    /// Search active and matching: the shaped result rows.
    SearchResults(RenderTree),
}

impl std::fmt::Debug for RenderOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderOutput::Normal(tree) => f.debug_tuple("Normal").field(&tree.len()).finish(),
            RenderOutput::NoMatches { query } => {
                f.debug_struct("NoMatches").field("query", query).finish()
            }
            RenderOutput::SearchResults(tree) => {
                f.debug_tuple("SearchResults").field(&tree.len()).finish()
            }
        }
    }
}

/// Coordinates the two rendering paths over one registry and one search
/// engine. Owns neither the registry nor the authored content; both are
/// supplied by the enclosing UI.
pub struct RenderCoordinator<'a> {
    registry: &'a FragmentRegistry,
    engine: Box<dyn SearchEngine>,
}

impl<'a> RenderCoordinator<'a> {
    /// Create a coordinator over `registry` with the default search engine.
    pub fn new(registry: &'a FragmentRegistry) -> Self {
        Self {
            registry,
            engine: Box::new(DefaultSearchEngine),
        }
    }

    /// Substitute a custom search engine (builder).
    pub fn with_engine(mut self, engine: Box<dyn SearchEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Render for a display context in one call: empty query renders the
    /// normal hierarchy, a matching query renders search results, and a
    /// non-matching query yields the explicit no-match signal.
    pub fn display(&self, content: &Content, tree: &[Node], query: &str) -> RenderOutput {
        match search_outcome(self.engine.as_ref(), tree, query) {
            SearchOutcome::Inactive => RenderOutput::Normal(self.render_normal(content)),
            SearchOutcome::NoMatches { query } => RenderOutput::NoMatches { query },
            SearchOutcome::Matches(results) => {
                RenderOutput::SearchResults(self.render_search(&results))
            }
        }
    }

    /// Render the live authored hierarchy, unfiltered.
    ///
    /// Fragments come straight from the declarations' own factories; the
    /// registry plays no part in this path.
    pub fn render_normal(&self, content: &Content) -> RenderTree {
        let mut tree = RenderTree::new();
        let root = tree.insert(RowData::new(
            NodeId::from_raw(0),
            RowKind::Container,
            "Settings",
        ));
        self.mount_content(content, root, &mut tree);
        tracing::debug!(target: LOG_TARGET, rows = tree.len(), "rendered normal hierarchy");
        tree
    }

    fn mount_content(&self, content: &Content, parent: RowId, tree: &mut RenderTree) {
        match content {
            Content::Item(decl) => {
                let fragment = (decl.fragment)();
                tree.insert_child(
                    parent,
                    RowData::new(decl.identity(), RowKind::Control, &decl.title)
                        .with_icon(decl.icon.clone())
                        .with_fragment(fragment),
                );
            }
            Content::Group(decl) => {
                let section = tree.insert_child(
                    parent,
                    RowData::new(decl.identity(), RowKind::Section, &decl.title)
                        .with_icon(decl.icon.clone()),
                );
                for child in &decl.children {
                    self.mount_content(child, section, tree);
                }
            }
            Content::Sequence(list) | Content::Repeated(list) => {
                for child in list {
                    self.mount_content(child, parent, tree);
                }
            }
            Content::Conditional(Some(inner)) => self.mount_content(inner, parent, tree),
            Content::Conditional(None) => {}
        }
    }

    /// Render shaped search results.
    ///
    /// Navigation results become a single tappable row. Expanded results
    /// become a section header plus one row per matched item, each resolved
    /// through the registry for a fresh live fragment; a miss degrades to an
    /// inert static row rather than dropping the entry.
    pub fn render_search(&self, results: &[SearchResult]) -> RenderTree {
        let mut tree = RenderTree::new();
        let root = tree.insert(RowData::new(
            NodeId::from_raw(0),
            RowKind::Container,
            "Search Results",
        ));
        for result in results {
            if result.is_navigation {
                tree.insert_child(
                    root,
                    RowData::new(
                        result.group.id,
                        RowKind::NavigationLink,
                        &result.group.title,
                    )
                    .with_icon(result.group.icon.clone()),
                );
            } else {
                let section = tree.insert_child(
                    root,
                    RowData::new(result.group.id, RowKind::Section, &result.group.title)
                        .with_icon(result.group.icon.clone()),
                );
                for item in &result.matched_items {
                    self.mount_item(item, section, &mut tree);
                }
            }
        }
        tracing::debug!(target: LOG_TARGET, rows = tree.len(), "rendered search results");
        tree
    }

    /// Resolve a navigation result's id back to its subtree and render that
    /// group as its own screen, titled with its breadcrumb path.
    ///
    /// Items resolve through the registry (fresh fragments); child groups
    /// become navigation links. Returns `None` when the id names no group in
    /// the tree.
    pub fn render_target(&self, tree: &[Node], id: NodeId) -> Option<RenderTree> {
        let group = find_group(tree, id)?;
        let parents = ParentMap::build(tree);
        let breadcrumb = parents
            .path_to(id)
            .into_iter()
            .filter_map(|ancestor| find_group(tree, ancestor))
            .map(|g| g.title.as_str())
            .collect::<Vec<_>>()
            .join(" > ");

        let mut out = RenderTree::new();
        let root = out.insert(
            RowData::new(group.id, RowKind::Container, breadcrumb).with_icon(group.icon.clone()),
        );
        for child in &group.children {
            match child {
                Node::Item(item) => self.mount_item(item, root, &mut out),
                Node::Group(sub) => {
                    out.insert_child(
                        root,
                        RowData::new(sub.id, RowKind::NavigationLink, &sub.title)
                            .with_icon(sub.icon.clone()),
                    );
                }
            }
        }
        Some(out)
    }

    /// Mount one item row from metadata: registry hit yields a live control,
    /// a miss yields the static fallback.
    fn mount_item(&self, item: &ItemNode, parent: RowId, tree: &mut RenderTree) {
        match self.registry.resolve(item.id) {
            Some(fragment) => {
                tree.insert_child(
                    parent,
                    RowData::new(item.id, RowKind::Control, &item.title)
                        .with_icon(item.icon.clone())
                        .with_fragment(fragment),
                );
            }
            None => {
                let mut fallback = StaticRow::new(&item.title);
                if let Some(icon) = &item.icon {
                    fallback = fallback.with_icon(icon);
                }
                tree.insert_child(
                    parent,
                    RowData::new(item.id, RowKind::Static, &item.title)
                        .with_icon(item.icon.clone())
                        .with_fragment(Box::new(fallback)),
                );
            }
        }
    }
}

/// Render a whole group from metadata without a coordinator — used by the
/// styling layer for search-context previews.
pub fn group_preview(group: &GroupNode) -> Vec<String> {
    group
        .children
        .iter()
        .map(|child| child.title().to_owned())
        .collect()
}
