//! Shape discrimination for untyped input.
//!
//! Validation checks never duck-type ("does it have a length?"). Every
//! value is classified exactly once at the boundary into one of four
//! shapes, and the checks branch on the classified variant.

use serde_json::{Map, Value};

/// The four shapes a value can take from the validator's point of view.
///
/// Borrows the classified payload so a check that needs the contents
/// gets them from the same match that decided the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Absent, or explicitly null.
    Missing,
    /// A leaf value: string, number, or boolean.
    Scalar(&'a Value),
    /// An ordered sequence (JSON array).
    Sequence(&'a [Value]),
    /// A keyed record (JSON object).
    Record(&'a Map<String, Value>),
}

impl<'a> Shape<'a> {
    /// Classify an optional value. `None` and `null` both count as missing.
    pub fn of(value: Option<&'a Value>) -> Shape<'a> {
        match value {
            None | Some(Value::Null) => Shape::Missing,
            Some(Value::Array(items)) => Shape::Sequence(items),
            Some(Value::Object(map)) => Shape::Record(map),
            Some(other) => Shape::Scalar(other),
        }
    }

    /// Returns true if the value is present (anything but `Missing`).
    pub fn is_present(&self) -> bool {
        !matches!(self, Shape::Missing)
    }

    /// Runtime type name for diagnostics. `Missing` has none.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Shape::Missing => None,
            Shape::Scalar(value) => Some(type_name(value)),
            Shape::Sequence(_) => Some("array"),
            Shape::Record(_) => Some("object"),
        }
    }
}

/// Runtime type name of a value, as it appears in diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_missing() {
        assert_eq!(Shape::of(None), Shape::Missing);
        assert_eq!(Shape::of(Some(&Value::Null)), Shape::Missing);
        assert!(!Shape::of(None).is_present());
        assert_eq!(Shape::Missing.type_name(), None);
    }

    #[test]
    fn classifies_sequences_and_records() {
        let seq = json!([1, 2]);
        let empty_seq = json!([]);
        let record = json!({"a": 1});

        assert!(matches!(Shape::of(Some(&seq)), Shape::Sequence(items) if items.len() == 2));
        assert!(matches!(Shape::of(Some(&empty_seq)), Shape::Sequence(items) if items.is_empty()));
        assert!(matches!(Shape::of(Some(&record)), Shape::Record(map) if map.contains_key("a")));
        assert_eq!(Shape::of(Some(&seq)).type_name(), Some("array"));
        assert_eq!(Shape::of(Some(&record)).type_name(), Some("object"));
    }

    #[test]
    fn classifies_scalars() {
        let string = json!("foo");
        let number = json!(5);
        let boolean = json!(true);

        assert!(matches!(Shape::of(Some(&string)), Shape::Scalar(_)));
        assert_eq!(Shape::of(Some(&string)).type_name(), Some("string"));
        assert_eq!(Shape::of(Some(&number)).type_name(), Some("number"));
        assert_eq!(Shape::of(Some(&boolean)).type_name(), Some("boolean"));
    }

    #[test]
    fn type_names_match_diagnostics() {
        assert_eq!(type_name(&json!("foo")), "string");
        assert_eq!(type_name(&json!(5)), "number");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!(false)), "boolean");
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!([])), "array");
        assert_eq!(type_name(&json!({})), "object");
    }
}
