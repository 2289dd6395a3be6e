//! Tabular dataset validation against self-describing column metadata.
//!
//! A dataset bundles row-oriented `data` with `metadata.columns`
//! descriptors. gridcheck rejects malformed datasets early, with a
//! specific, parameterized diagnostic naming exactly what is wrong.
//!
//! # Crate Structure
//!
//! - [`model`] — Shape discrimination for untyped input, column descriptors
//! - [`validate`] — The check pipeline, error catalog, and column lookup
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let dataset = json!({
//!     "data": [{"name": "Joe"}, {"name": "Jane"}],
//!     "metadata": {"columns": [{"name": "name", "type": "string"}]}
//! });
//! assert!(gridcheck::validate(&dataset).await.is_ok());
//! # }
//! ```

/// Re-export model types.
pub mod model {
    pub use gridcheck_model::*;
}

/// Re-export validation types.
pub mod validate {
    pub use gridcheck_validate::*;
}

pub use gridcheck_model::{ColumnDescriptor, Shape};
pub use gridcheck_validate::{
    column_metadata, validate, validate_with_config, ErrorKind, Result, RowScan, ValidateError,
    ValidatorConfig,
};
