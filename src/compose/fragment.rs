//! Fragment trait: the live, stateful half of the dual representation.
//!
//! A fragment is a single displayable unit — one settings row. Fragments are
//! produced on demand by zero-argument factories and are never shared: two
//! simultaneous display locations (say, a row in normal navigation and the
//! same row inside search results) each get their own instance, coupled only
//! through the caller-owned [`Binding`](crate::compose::Binding) they read.

use std::any::Any;
use std::sync::Arc;

/// Object-safe trait for a live renderable settings row.
///
/// Designed like a widget trait: core methods take `&self`/`&mut self` and
/// return owned values, so `Box<dyn Fragment>` works everywhere.
pub trait Fragment {
    /// The fragment's type name (e.g. "Toggle", "Slider").
    fn fragment_type(&self) -> &str;

    /// Render the fragment's current state as a single line of text.
    ///
    /// The styling layer decides what to do with it; the core only needs
    /// "something displayable".
    fn render_line(&self) -> String;

    /// Whether this fragment accepts user interaction.
    ///
    /// Defaults to `true`; the static fallback row overrides this.
    fn interactive(&self) -> bool {
        true
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Zero-argument factory producing a fresh live fragment on every call.
///
/// Factories are registered in the
/// [`FragmentRegistry`](crate::registry::FragmentRegistry) keyed by stable
/// id, and re-registered on every build pass; being cheap closures, the
/// overwrite churn is harmless.
pub type FragmentFactory = Arc<dyn Fn() -> Box<dyn Fragment> + Send + Sync>;

/// Wrap a closure as a [`FragmentFactory`].
pub fn factory<F>(f: F) -> FragmentFactory
where
    F: Fn() -> Box<dyn Fragment> + Send + Sync + 'static,
{
    Arc::new(f)
}
