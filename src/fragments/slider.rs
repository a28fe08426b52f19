//! Slider: a bounded numeric control bound to caller state.

use std::any::Any;

use crate::compose::binding::Binding;
use crate::compose::fragment::Fragment;

/// A numeric slider reading and writing a `Binding<f64>`.
///
/// Values are clamped to `[min, max]` on every write.
pub struct Slider {
    label: String,
    value: Binding<f64>,
    min: f64,
    max: f64,
    step: f64,
}

impl Slider {
    /// Create a slider with the given label and bounds, bound to `value`.
    pub fn new(label: impl Into<String>, value: Binding<f64>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            value,
            min,
            max,
            step: 1.0,
        }
    }

    /// Set the increment step (builder).
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Set the value, clamped to the slider's bounds.
    pub fn set_value(&mut self, value: f64) {
        let clamped = value.clamp(self.min, self.max);
        self.value.set(clamped);
    }

    /// Increase by one step.
    pub fn increment(&mut self) {
        self.set_value(self.value() + self.step);
    }

    /// Decrease by one step.
    pub fn decrement(&mut self) {
        self.set_value(self.value() - self.step);
    }
}

impl Fragment for Slider {
    fn fragment_type(&self) -> &str {
        "Slider"
    }

    fn render_line(&self) -> String {
        format!("{}: {} [{}..{}]", self.label, self.value(), self.min, self.max)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
