//! Styling surface: the payloads handed to an external style layer.
//!
//! The core does not style anything. It hands three configuration payloads —
//! container, group, item — to whatever [`StyleHandler`] the embedding UI
//! supplies, and assumes nothing beyond "renders something". [`DefaultStyle`]
//! is a plain-text handler used by the headless test helpers.

use crate::compose::binding::Binding;
use crate::node::model::{GroupNode, ItemNode, NodeId, Presentation};

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Container-level payload: the settings screen as a whole.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Screen title.
    pub title: String,
    /// The live search text, owned by the caller.
    pub search_text: Binding<String>,
    /// The navigation stack (ids of groups drilled into), owned by the
    /// caller.
    pub navigation: Binding<Vec<NodeId>>,
}

impl ContainerConfig {
    /// Create a container payload with fresh empty bindings.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            search_text: Binding::default(),
            navigation: Binding::default(),
        }
    }

    /// Supply the caller's search-text binding (builder).
    pub fn with_search_text(mut self, binding: Binding<String>) -> Self {
        self.search_text = binding;
        self
    }

    /// Supply the caller's navigation binding (builder).
    pub fn with_navigation(mut self, binding: Binding<Vec<NodeId>>) -> Self {
        self.navigation = binding;
        self
    }
}

/// Group-level payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfig {
    /// Group title.
    pub title: String,
    /// Optional icon reference.
    pub icon: Option<String>,
    /// Optional footer text.
    pub footer: Option<String>,
    /// Navigation or inline.
    pub presentation: Presentation,
    /// Ids of the group's children, for search-context previews.
    pub child_ids: Vec<NodeId>,
}

impl GroupConfig {
    /// Build the payload for a metadata group.
    pub fn from_node(node: &GroupNode) -> Self {
        Self {
            title: node.title.clone(),
            icon: node.icon.clone(),
            footer: None,
            presentation: node.presentation,
            child_ids: node.children.iter().map(|child| child.id()).collect(),
        }
    }

    /// Set the footer text (builder); footers live on declarations, not
    /// nodes, so the caller supplies them.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Item-level payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemConfig {
    /// Item title.
    pub title: String,
    /// Optional icon reference.
    pub icon: Option<String>,
}

impl ItemConfig {
    /// Build the payload for a metadata item.
    pub fn from_node(node: &ItemNode) -> Self {
        Self {
            title: node.title.clone(),
            icon: node.icon.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// StyleHandler
// ---------------------------------------------------------------------------

/// The externally-supplied style function, one method per payload.
///
/// `body` holds the already-rendered lines of nested content.
pub trait StyleHandler {
    /// Render the whole container.
    fn container(&self, config: &ContainerConfig, body: &[String]) -> String;

    /// Render one group section.
    fn group(&self, config: &GroupConfig, body: &[String]) -> String;

    /// Render one item row from its content line.
    fn item(&self, config: &ItemConfig, line: &str) -> String;
}

/// Plain-text style used by the headless test helpers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStyle;

impl StyleHandler for DefaultStyle {
    fn container(&self, config: &ContainerConfig, body: &[String]) -> String {
        let mut out = format!("= {} =", config.title);
        for line in body {
            out.push('\n');
            out.push_str(line);
        }
        out
    }

    fn group(&self, config: &GroupConfig, body: &[String]) -> String {
        let mut out = match &config.icon {
            Some(icon) => format!("[{icon}] {}:", config.title),
            None => format!("{}:", config.title),
        };
        for line in body {
            out.push('\n');
            out.push_str("  ");
            out.push_str(line);
        }
        if let Some(footer) = &config.footer {
            out.push('\n');
            out.push_str("  (");
            out.push_str(footer);
            out.push(')');
        }
        out
    }

    fn item(&self, _config: &ItemConfig, line: &str) -> String {
        format!("- {line}")
    }
}
