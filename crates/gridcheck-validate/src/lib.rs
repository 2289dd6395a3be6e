//! Structural validation of tabular datasets.
//!
//! A dataset bundles row-oriented `data` with `metadata.columns`
//! descriptors declaring the expected shape of each row. [`validate`]
//! runs a fixed sequence of structural checks over an untyped candidate
//! value and rejects malformed datasets with one parameterized,
//! ready-to-display diagnostic.
//!
//! Declared column types are carried but never enforced against actual
//! values — value-level type checking is an extension point, not part of
//! this contract.

pub mod catalog;
pub mod columns;
pub mod config;
pub mod error;
pub mod validator;

pub use catalog::{render, ErrorKind, ALL_KINDS};
pub use columns::column_metadata;
pub use config::{RowScan, ValidatorConfig};
pub use error::{Result, ValidateError};
pub use validator::{validate, validate_with_config};
