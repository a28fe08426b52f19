//! Fragment registry: stable id -> live-fragment factory.
//!
//! The registry is the bridge from metadata-only search results back to
//! stateful, interactive rows. The tree builder (re)registers a factory for
//! every item it walks — idempotent overwrites keyed by content-derived id —
//! and the render coordinator resolves ids when search results need live
//! rows. Entries are factories, never cached instances: a fragment shown in
//! normal navigation and in search results at the same time must be two
//! independent instances, or their view state desynchronizes.
//!
//! Constructed explicitly and passed by reference; there is no global
//! singleton. Interior locking makes register-during-build safe against
//! resolve-during-render.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::compose::fragment::{Fragment, FragmentFactory};
use crate::node::model::NodeId;

/// Log target for registry events.
pub const LOG_TARGET: &str = "prefpane::registry";

/// Keyed store of zero-argument live-fragment factories.
///
/// Single-writer-many-reader access pattern; a coarse `RwLock` covers it.
#[derive(Default)]
pub struct FragmentRegistry {
    entries: RwLock<HashMap<NodeId, FragmentFactory>>,
}

impl FragmentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `id`, unconditionally replacing any previous
    /// entry (last-writer-wins).
    ///
    /// Safe because same-id entries are semantically equivalent by
    /// construction: identity is derived from the declaration's content, so
    /// the same id always maps to an equivalent factory.
    pub fn register(&self, id: NodeId, factory: FragmentFactory) {
        tracing::trace!(target: LOG_TARGET, %id, "register fragment factory");
        self.entries.write().insert(id, factory);
    }

    /// Produce a fresh live fragment for `id`, or `None` for unknown ids.
    ///
    /// Invokes the factory on every call; resolving the same id twice yields
    /// two independent fragments. An unknown id is a defined miss, not an
    /// error — callers fall back to a static title/icon row.
    pub fn resolve(&self, id: NodeId) -> Option<Box<dyn Fragment>> {
        let factory = self.entries.read().get(&id).cloned();
        if factory.is_none() {
            tracing::debug!(target: LOG_TARGET, %id, "registry miss");
        }
        factory.map(|make| make())
    }

    /// Whether an entry exists for `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl std::fmt::Debug for FragmentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentRegistry")
            .field("entries", &self.len())
            .finish()
    }
}
