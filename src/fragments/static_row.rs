//! StaticRow: fixed title/icon text, no interaction.
//!
//! The fallback the render coordinator uses when a registry lookup misses: a
//! search result's row degrades to inert text instead of crashing or
//! vanishing.

use std::any::Any;

use crate::compose::fragment::Fragment;

/// A non-interactive row showing a title and optional icon.
pub struct StaticRow {
    title: String,
    icon: Option<String>,
}

impl StaticRow {
    /// Create a static row with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    /// Set the icon (builder).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The row's title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Fragment for StaticRow {
    fn fragment_type(&self) -> &str {
        "StaticRow"
    }

    fn render_line(&self) -> String {
        match &self.icon {
            Some(icon) => format!("[{icon}] {}", self.title),
            None => self.title.clone(),
        }
    }

    fn interactive(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
