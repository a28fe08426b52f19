//! Toggle: a boolean switch bound to caller state.

use std::any::Any;

use crate::compose::binding::Binding;
use crate::compose::fragment::Fragment;

/// An on/off switch reading and writing a `Binding<bool>`.
///
/// The fragment keeps a `focused` flag of its own — per-instance view state
/// — while the switch value itself lives in the caller's binding. That split
/// is what keeps two simultaneously-displayed copies of the same setting
/// honest: focus is independent, the value is shared.
pub struct Toggle {
    label: String,
    value: Binding<bool>,
    focused: bool,
}

impl Toggle {
    /// Create a toggle with the given label, bound to `value`.
    pub fn new(label: impl Into<String>, value: Binding<bool>) -> Self {
        Self {
            label: label.into(),
            value,
            focused: false,
        }
    }

    /// The current switch state.
    pub fn is_on(&self) -> bool {
        self.value.get()
    }

    /// Flip the switch, writing through to the caller's binding.
    pub fn toggle(&mut self) {
        self.value.update(|v| *v = !*v);
    }

    /// Per-instance focus flag.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set the per-instance focus flag.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Fragment for Toggle {
    fn fragment_type(&self) -> &str {
        "Toggle"
    }

    fn render_line(&self) -> String {
        let state = if self.is_on() { "on" } else { "off" };
        format!("{}: {state}", self.label)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
