//! Headless test helpers: render trees to plain text, demo fixtures.
//!
//! Use [`render_to_string`] to capture a [`RenderTree`] as indented text for
//! snapshot-style assertions, and [`demo_settings`] for a small hierarchy
//! with live bindings.

use crate::compose::binding::Binding;
use crate::compose::content::{when, Content, GroupDecl};
use crate::fragments::{slider_item, text_item, toggle_item};
use crate::render::tree::{RenderTree, RowId, RowKind};
use crate::style::{ContainerConfig, GroupConfig, ItemConfig, StyleHandler};
use crate::node::model::Presentation;

/// Render a tree as indented plain text, one row per line.
///
/// Kinds are marked so tests can assert structure at a glance:
/// sections end with `:`, navigation links with `>`.
pub fn render_to_string(tree: &RenderTree) -> String {
    let Some(root) = tree.root() else {
        return String::new();
    };
    let mut lines = Vec::new();
    walk(tree, root, 0, &mut lines);
    lines.join("\n")
}

fn walk(tree: &RenderTree, row: RowId, depth: usize, lines: &mut Vec<String>) {
    let data = tree.get(row).expect("row exists during walk");
    let indent = "  ".repeat(depth);
    let marker = match data.kind {
        RowKind::Container => "=",
        RowKind::Section => ":",
        RowKind::NavigationLink => ">",
        RowKind::Control | RowKind::Static => "",
    };
    lines.push(format!("{indent}{}{marker}", data.display_line()));
    for &child in tree.children(row) {
        walk(tree, child, depth + 1, lines);
    }
}

/// Render a tree through a [`StyleHandler`], bottom-up: item rows become
/// styled lines, section rows wrap their children, and the container wraps
/// everything.
pub fn render_with_style(
    tree: &RenderTree,
    container: &ContainerConfig,
    style: &dyn StyleHandler,
) -> String {
    let Some(root) = tree.root() else {
        return style.container(container, &[]);
    };
    let body: Vec<String> = tree
        .children(root)
        .iter()
        .map(|&child| style_row(tree, child, style))
        .collect();
    style.container(container, &body)
}

fn style_row(tree: &RenderTree, row: RowId, style: &dyn StyleHandler) -> String {
    let data = tree.get(row).expect("row exists during walk");
    match data.kind {
        RowKind::Section | RowKind::Container => {
            let body: Vec<String> = tree
                .children(row)
                .iter()
                .map(|&child| style_row(tree, child, style))
                .collect();
            let config = GroupConfig {
                title: data.title.clone(),
                icon: data.icon.clone(),
                footer: None,
                presentation: Presentation::Navigation,
                child_ids: Vec::new(),
            };
            style.group(&config, &body)
        }
        _ => {
            let config = ItemConfig {
                title: data.title.clone(),
                icon: data.icon.clone(),
            };
            style.item(&config, &data.display_line())
        }
    }
}

/// Live state backing [`demo_settings`].
#[derive(Debug, Clone, Default)]
pub struct DemoState {
    pub dark_mode: Binding<bool>,
    pub volume: Binding<f64>,
    pub hostname: Binding<String>,
    pub airplane_mode: Binding<bool>,
    pub show_developer: bool,
}

/// A small settings hierarchy with live bindings, for tests and examples.
///
/// ```text
/// Settings
/// ├── Appearance            (navigation)
/// │   └── Dark Mode
/// ├── Connections           (inline, tag "network")
/// │   ├── Wi-Fi             (navigation)
/// │   │   └── Airplane Mode
/// │   └── Hostname
/// ├── Sound                 (navigation)
/// │   └── Volume
/// └── Developer             (conditional)
///     └── Verbose Logging
/// ```
pub fn demo_settings(state: &DemoState) -> Content {
    GroupDecl::new("Settings")
        .child(
            GroupDecl::new("Appearance")
                .with_icon("paintbrush")
                .child(toggle_item("Dark Mode", state.dark_mode.clone())),
        )
        .child(
            GroupDecl::new("Connections")
                .inline()
                .with_tag("network")
                .child(
                    GroupDecl::new("Wi-Fi")
                        .with_icon("wifi")
                        .with_tag("wireless")
                        .child(toggle_item("Airplane Mode", state.airplane_mode.clone())),
                )
                .child(text_item("Hostname", state.hostname.clone())),
        )
        .child(
            GroupDecl::new("Sound")
                .with_icon("speaker")
                .child(slider_item("Volume", state.volume.clone(), 0.0, 100.0)),
        )
        .child(when(state.show_developer, || {
            GroupDecl::new("Developer")
                .child(toggle_item("Verbose Logging", Binding::new(false)))
                .into()
        }))
        .into()
}
