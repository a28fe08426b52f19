//! # prefpane
//!
//! A declarative framework core for building hierarchical settings and
//! preferences interfaces with automatic search and navigation.
//!
//! prefpane keeps two representations of the same settings hierarchy in sync:
//! a cheap, serializable metadata tree ([`node::Node`]) rebuilt on every
//! relevant state change and consumed by search, and a live, stateful
//! rendering path reached through a fragment registry
//! ([`registry::FragmentRegistry`]) so that interactive controls keep working
//! even when they surface through search results instead of normal
//! navigation. Stable content-derived identifiers are the join key between
//! the two worlds.
//!
//! ## Core Systems
//!
//! - **[`node`]** — Metadata node model, stable identity, parent map
//! - **[`compose`]** — Declarative authoring surface: groups, items,
//!   conditionals, repetition, bindings, the fragment trait
//! - **[`fragments`]** — Built-in live fragments: static row, toggle, slider,
//!   text field
//! - **[`registry`]** — Keyed store of live-fragment factories
//! - **[`builder`]** — Walks a composition into a node tree, registering
//!   fragment factories as it goes
//! - **[`search`]** — Normalization, scoring, traversal, result shaping
//! - **[`render`]** — Row arena and the coordinator that picks between the
//!   live hierarchy and registry lookups
//! - **[`style`]** — Configuration payloads handed to an external styling
//!   layer
//! - **[`testing`]** — Headless render helpers and fixtures

// Metadata model
pub mod node;

// Authoring surface
pub mod compose;
pub mod fragments;

// Live-rendering path
pub mod builder;
pub mod registry;

// Search
pub mod search;

// Rendering
pub mod render;
pub mod style;

// Test helpers
pub mod testing;
