//! The [`types`](self) module keeps track of the relations between types that
//! are used by the [`OfType`](crate::OfType) matcher.

pub mod hierarchy;

pub use hierarchy::{declare_subtype, is_subtype_of};
