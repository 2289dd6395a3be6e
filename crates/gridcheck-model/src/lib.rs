//! Shape model for untyped tabular datasets.
//!
//! A candidate dataset arrives as an arbitrary JSON value. This crate
//! provides the vocabulary for reasoning about it before anything is
//! trusted: shape discrimination decided once at the boundary, and the
//! typed column descriptor view used after validation.

pub mod column;
pub mod shape;

pub use column::{ColumnDescriptor, Dataset};
pub use shape::{type_name, Shape};
