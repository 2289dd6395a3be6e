//! Column descriptors and the borrowing dataset view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One declared column in `dataset.metadata.columns`.
///
/// `type` declares the expected value type (`"string"`, `"number"`,
/// `"date"`, ...). It is carried as data only — agreement between the
/// declared type and actual row values is a documented extension point,
/// not something the validator enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Unique key cross-referenced against row keys.
    pub name: String,
    /// Declared value type, not enforced. Empty when the descriptor was
    /// read from an unvalidated dataset that omitted it.
    #[serde(rename = "type", default)]
    pub column_type: String,
    /// Descriptive flag for cube-style datasets. Not validated further.
    #[serde(rename = "isDimension", skip_serializing_if = "Option::is_none")]
    pub is_dimension: Option<bool>,
}

/// Borrowing view over a candidate dataset value.
///
/// Field access only — no shape is assumed and nothing is copied. The
/// accessors return `None` both when the field is absent and when the
/// containing value is not a record at all; callers discriminate shape
/// themselves.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    value: &'a Value,
}

impl<'a> Dataset<'a> {
    /// Wrap a candidate value. No validation happens here.
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying value.
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    /// The `data` field, if the dataset is a record that has one.
    pub fn data(&self) -> Option<&'a Value> {
        self.value.get("data")
    }

    /// The `metadata` field.
    pub fn metadata(&self) -> Option<&'a Value> {
        self.value.get("metadata")
    }

    /// The `metadata.columns` field.
    pub fn metadata_columns(&self) -> Option<&'a Value> {
        self.metadata()?.get("columns")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accessors_walk_the_value() {
        let value = json!({
            "data": [{"name": "Joe"}],
            "metadata": {"columns": [{"name": "name", "type": "string"}]}
        });
        let dataset = Dataset::new(&value);

        assert_eq!(dataset.data(), Some(&json!([{"name": "Joe"}])));
        assert!(dataset.metadata().is_some());
        assert_eq!(
            dataset.metadata_columns(),
            Some(&json!([{"name": "name", "type": "string"}]))
        );
    }

    #[test]
    fn accessors_tolerate_any_shape() {
        let scalar = json!("yo mama");
        let dataset = Dataset::new(&scalar);
        assert!(dataset.data().is_none());
        assert!(dataset.metadata().is_none());
        assert!(dataset.metadata_columns().is_none());

        let no_columns = json!({"data": [], "metadata": {}});
        assert!(Dataset::new(&no_columns).metadata_columns().is_none());

        let scalar_metadata = json!({"data": [], "metadata": 5});
        assert!(Dataset::new(&scalar_metadata).metadata_columns().is_none());
    }

    #[test]
    fn descriptor_round_trips_wire_names() {
        let descriptor: ColumnDescriptor = serde_json::from_value(json!({
            "name": "name",
            "type": "string",
            "isDimension": true
        }))
        .unwrap();

        assert_eq!(descriptor.name, "name");
        assert_eq!(descriptor.column_type, "string");
        assert_eq!(descriptor.is_dimension, Some(true));

        let plain: ColumnDescriptor =
            serde_json::from_value(json!({"name": "population", "type": "number"})).unwrap();
        assert_eq!(plain.is_dimension, None);
    }
}
