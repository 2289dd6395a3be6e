//! Column metadata lookup.
//!
//! A convenience outside the validation pipeline: fetch one column's
//! descriptor by name. Works on validated and unvalidated datasets alike
//! and does not re-run validation — a dataset without a well-formed
//! `metadata.columns` simply has no descriptor to find.

use gridcheck_model::{ColumnDescriptor, Dataset, Shape};
use serde_json::Value;

use crate::catalog::ErrorKind;
use crate::error::{Result, ValidateError};

/// Look up the descriptor for `name` in `dataset.metadata.columns`.
///
/// Fails with `column_metadata_missing` when no descriptor with that
/// name exists.
pub fn column_metadata(dataset: &Value, name: &str) -> Result<ColumnDescriptor> {
    let missing = || {
        ValidateError::new(
            ErrorKind::ColumnMetadataMissing,
            vec![("column", name.to_string())],
        )
    };

    let columns = match Shape::of(Dataset::new(dataset).metadata_columns()) {
        Shape::Sequence(columns) => columns,
        _ => return Err(missing()),
    };

    columns
        .iter()
        .find(|column| column.get("name").and_then(Value::as_str) == Some(name))
        .and_then(|column| serde_json::from_value(column.clone()).ok())
        .ok_or_else(missing)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dataset() -> Value {
        json!({
            "data": [
                {"name": "China", "population": 1_376_048_943_u64},
                {"name": "India", "population": 1_311_050_527_u64}
            ],
            "metadata": {
                "isCube": true,
                "columns": [
                    {"name": "name", "type": "string", "isDimension": true},
                    {"name": "population", "type": "number"}
                ]
            }
        })
    }

    #[test]
    fn finds_descriptor_by_name() {
        let descriptor = column_metadata(&dataset(), "population").unwrap();
        assert_eq!(descriptor.name, "population");
        assert_eq!(descriptor.column_type, "number");
        assert_eq!(descriptor.is_dimension, None);

        let descriptor = column_metadata(&dataset(), "name").unwrap();
        assert_eq!(descriptor.is_dimension, Some(true));
    }

    #[test]
    fn missing_column_fails_with_its_name() {
        let err = column_metadata(&dataset(), "foo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnMetadataMissing);
        assert_eq!(err.param("column"), Some("foo"));
        assert_eq!(
            err.message(),
            "There is no entry for the column 'foo' in dataset.metadata.columns."
        );
    }

    #[test]
    fn malformed_dataset_fails_the_same_way() {
        let err = column_metadata(&json!({"data": []}), "name").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnMetadataMissing);

        let err = column_metadata(&json!("not a dataset"), "name").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnMetadataMissing);
    }

    #[test]
    fn descriptor_without_type_is_still_returned() {
        let value = json!({
            "metadata": {"columns": [{"name": "name"}]}
        });
        let descriptor = column_metadata(&value, "name").unwrap();
        assert_eq!(descriptor.column_type, "");
    }
}
