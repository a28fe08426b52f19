//! Built-in fragments: StaticRow, Toggle, Slider, TextField.
//!
//! Interactive fragments hold no settings values of their own; they read and
//! write a caller-owned [`Binding`](crate::compose::Binding). Two fragments
//! produced by the same factory are independent instances coupled only
//! through that shared cell.

pub mod static_row;
pub mod toggle;
pub mod slider;
pub mod text_field;

pub use static_row::StaticRow;
pub use toggle::Toggle;
pub use slider::Slider;
pub use text_field::TextField;

use crate::compose::binding::Binding;
use crate::compose::content::ItemDecl;
use crate::compose::fragment::factory;

/// Declare an item rendering a [`Toggle`] bound to `value`.
pub fn toggle_item(title: impl Into<String>, value: Binding<bool>) -> ItemDecl {
    let title = title.into();
    let label = title.clone();
    ItemDecl::new(
        title,
        factory(move || Box::new(Toggle::new(&label, value.clone()))),
    )
}

/// Declare an item rendering a [`Slider`] bound to `value`.
pub fn slider_item(
    title: impl Into<String>,
    value: Binding<f64>,
    min: f64,
    max: f64,
) -> ItemDecl {
    let title = title.into();
    let label = title.clone();
    ItemDecl::new(
        title,
        factory(move || Box::new(Slider::new(&label, value.clone(), min, max))),
    )
}

/// Declare an item rendering a [`TextField`] bound to `value`.
pub fn text_item(title: impl Into<String>, value: Binding<String>) -> ItemDecl {
    let title = title.into();
    let label = title.clone();
    ItemDecl::new(
        title,
        factory(move || Box::new(TextField::new(&label, value.clone()))),
    )
}
