//! Declarative authoring surface: content variants, bindings, fragments.

pub mod binding;
pub mod content;
pub mod fragment;

pub use binding::Binding;
pub use content::{repeated, when, Content, GroupDecl, ItemDecl, ValidationError};
pub use fragment::{factory, Fragment, FragmentFactory};
