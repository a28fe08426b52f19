//! Content: the closed declarative variant the tree builder walks.
//!
//! User-authored hierarchies are compositions of five shapes — groups,
//! items, sequences, conditionals, and repetition. Higher-level compositions
//! are ordinary functions returning [`Content`]; there is deliberately no
//! open trait to implement, so the builder stays exhaustive.
//!
//! # Examples
//!
//! ```ignore
//! let content: Content = GroupDecl::new("General")
//!     .with_icon("gearshape")
//!     .child(toggle_item("Dark Mode", dark_mode.clone()))
//!     .child(when(advanced, || developer_section()))
//!     .into();
//! ```

use std::fmt;

use crate::compose::fragment::FragmentFactory;
use crate::node::identity::{node_id, NodeKind};
use crate::node::model::{NodeId, Presentation};

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// A user-authored declaration: the closed set of composable shapes.
pub enum Content {
    /// A group of settings with its own title and presentation.
    Group(GroupDecl),
    /// A single settings row with a live-fragment factory.
    Item(ItemDecl),
    /// An ordered sequence of declarations, spliced in place.
    Sequence(Vec<Content>),
    /// A subtree that is present or absent based on caller state,
    /// re-evaluated fresh on every build pass.
    Conditional(Option<Box<Content>>),
    /// One sub-declaration per element of a caller-supplied collection.
    Repeated(Vec<Content>),
}

/// Include `f()` only when `condition` holds.
///
/// An absent branch contributes zero nodes; this is ordinary data, not
/// special control flow.
pub fn when(condition: bool, f: impl FnOnce() -> Content) -> Content {
    Content::Conditional(condition.then(|| Box::new(f())))
}

/// One declaration per element of `items`, in order.
pub fn repeated<T>(
    items: impl IntoIterator<Item = T>,
    mut f: impl FnMut(T) -> Content,
) -> Content {
    Content::Repeated(items.into_iter().map(&mut f).collect())
}

// ---------------------------------------------------------------------------
// GroupDecl
// ---------------------------------------------------------------------------

/// Declaration of a settings group.
pub struct GroupDecl {
    /// Display title.
    pub title: String,
    /// Optional symbolic icon reference.
    pub icon: Option<String>,
    /// Search keywords.
    pub tags: Vec<String>,
    /// Navigation (own screen) or inline (spliced into the parent).
    pub presentation: Presentation,
    /// Optional footer text, handed to the styling layer only.
    pub footer: Option<String>,
    /// Nested declarations.
    pub children: Vec<Content>,
}

impl GroupDecl {
    /// Create a navigation group with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            tags: Vec::new(),
            presentation: Presentation::Navigation,
            footer: None,
            children: Vec::new(),
        }
    }

    /// Set the icon (builder).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Add a search tag (builder).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple search tags (builder).
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the footer text (builder).
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Present inline: splice children into the parent listing (builder).
    pub fn inline(mut self) -> Self {
        self.presentation = Presentation::Inline;
        self
    }

    /// Present as a separately-navigable screen (builder). The default.
    pub fn navigation(mut self) -> Self {
        self.presentation = Presentation::Navigation;
        self
    }

    /// Append a child declaration (builder).
    pub fn child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child declarations (builder).
    pub fn children(mut self, children: impl IntoIterator<Item = Content>) -> Self {
        self.children.extend(children);
        self
    }

    /// The stable identity this declaration will receive when built.
    pub fn identity(&self) -> NodeId {
        node_id(
            NodeKind::Group,
            &self.title,
            self.icon.as_deref(),
            Some(self.presentation),
        )
    }
}

impl fmt::Debug for GroupDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDecl")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("tags", &self.tags)
            .field("presentation", &self.presentation)
            .field("children", &self.children.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ItemDecl
// ---------------------------------------------------------------------------

/// Declaration of a single settings row.
///
/// Carries the zero-argument factory producing the row's live fragment; the
/// factory lands in the registry when the declaration is built.
pub struct ItemDecl {
    /// Display title.
    pub title: String,
    /// Optional symbolic icon reference.
    pub icon: Option<String>,
    /// Search keywords.
    pub tags: Vec<String>,
    /// Whether this item participates in search indexing.
    pub searchable: bool,
    /// Factory for the row's live fragment.
    pub fragment: FragmentFactory,
}

impl ItemDecl {
    /// Create an item with the given title and fragment factory.
    pub fn new(title: impl Into<String>, fragment: FragmentFactory) -> Self {
        Self {
            title: title.into(),
            icon: None,
            tags: Vec::new(),
            searchable: true,
            fragment,
        }
    }

    /// Set the icon (builder).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Add a search tag (builder).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple search tags (builder).
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Opt the item out of (or back into) search indexing (builder).
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// The stable identity this declaration will receive when built.
    pub fn identity(&self) -> NodeId {
        node_id(NodeKind::Item, &self.title, self.icon.as_deref(), None)
    }
}

impl fmt::Debug for ItemDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemDecl")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("tags", &self.tags)
            .field("searchable", &self.searchable)
            .finish()
    }
}

impl From<GroupDecl> for Content {
    fn from(decl: GroupDecl) -> Self {
        Content::Group(decl)
    }
}

impl From<ItemDecl> for Content {
    fn from(decl: ItemDecl) -> Self {
        Content::Item(decl)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Group(decl) => f.debug_tuple("Group").field(decl).finish(),
            Content::Item(decl) => f.debug_tuple("Item").field(decl).finish(),
            Content::Sequence(list) => f.debug_tuple("Sequence").field(&list.len()).finish(),
            Content::Conditional(branch) => f
                .debug_tuple("Conditional")
                .field(&branch.is_some())
                .finish(),
            Content::Repeated(list) => f.debug_tuple("Repeated").field(&list.len()).finish(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Problems a pre-flight [`Content::validate`] lint can surface.
///
/// Building never fails; these are authoring-time diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A group or item was declared with an empty title.
    #[error("empty title on {kind} declaration")]
    EmptyTitle {
        /// "group" or "item".
        kind: &'static str,
    },
    /// Two sibling declarations derive the same stable identity.
    ///
    /// Colliding ids are a documented trade-off of content-derived identity,
    /// but they corrupt dedup-by-id in search, so the lint flags them.
    #[error("sibling declarations titled {title:?} derive the same identity {id}")]
    IdentityCollision { title: String, id: NodeId },
}

impl Content {
    /// Lint this declaration tree, reporting the first problem found.
    ///
    /// Optional: the tree builder accepts anything well-formed and never
    /// fails. Collisions are checked per sibling scope, the scope in which
    /// they would corrupt search dedup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Content::Group(decl) => {
                if decl.title.is_empty() {
                    return Err(ValidationError::EmptyTitle { kind: "group" });
                }
                Self::validate_scope(&decl.children)
            }
            Content::Item(decl) => {
                if decl.title.is_empty() {
                    return Err(ValidationError::EmptyTitle { kind: "item" });
                }
                Ok(())
            }
            Content::Sequence(list) | Content::Repeated(list) => Self::validate_scope(list),
            Content::Conditional(branch) => match branch {
                Some(inner) => inner.validate(),
                None => Ok(()),
            },
        }
    }

    /// Validate one sibling scope: recurse into each child, then check that
    /// no two declarations in the flattened scope share an identity.
    fn validate_scope(list: &[Content]) -> Result<(), ValidationError> {
        for child in list {
            child.validate()?;
        }
        let mut seen: Vec<(NodeId, &str)> = Vec::new();
        let mut ids = Vec::new();
        Self::collect_scope_ids(list, &mut ids);
        for (id, title) in ids {
            if seen.iter().any(|(other, _)| *other == id) {
                return Err(ValidationError::IdentityCollision {
                    title: title.to_owned(),
                    id,
                });
            }
            seen.push((id, title));
        }
        Ok(())
    }

    /// Collect the identities this scope will contribute as siblings:
    /// sequences, repetition, and present conditionals flatten in place.
    fn collect_scope_ids<'a>(list: &'a [Content], out: &mut Vec<(NodeId, &'a str)>) {
        for child in list {
            match child {
                Content::Group(decl) => out.push((decl.identity(), &decl.title)),
                Content::Item(decl) => out.push((decl.identity(), &decl.title)),
                Content::Sequence(inner) | Content::Repeated(inner) => {
                    Self::collect_scope_ids(inner, out);
                }
                Content::Conditional(Some(inner)) => {
                    Self::collect_scope_ids(std::slice::from_ref(inner.as_ref()), out);
                }
                Content::Conditional(None) => {}
            }
        }
    }
}
