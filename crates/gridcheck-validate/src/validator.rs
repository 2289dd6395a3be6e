//! The validation pipeline.
//!
//! A fixed sequence of structural checks over an untyped dataset value.
//! Checks run in order, the first violated check wins, and exactly one
//! structured failure is produced per call. The validator never mutates
//! or retains its input, and never logs above trace level — surfacing
//! the failure is the caller's job.

use std::collections::HashSet;

use gridcheck_model::{type_name, Dataset, Shape};
use serde_json::Value;

use crate::catalog::ErrorKind;
use crate::config::{RowScan, ValidatorConfig};
use crate::error::{Result, ValidateError};

/// Validate a candidate dataset with default configuration.
///
/// The outcome is delivered through the returned future for uniformity
/// with callers sequencing several validations; the pipeline itself runs
/// to completion with no suspension points.
pub async fn validate(dataset: &Value) -> Result<()> {
    validate_with_config(dataset, &ValidatorConfig::default()).await
}

/// Validate a candidate dataset with explicit configuration.
pub async fn validate_with_config(dataset: &Value, config: &ValidatorConfig) -> Result<()> {
    let outcome = run_checks(dataset, config);
    if let Err(err) = &outcome {
        tracing::trace!(kind = err.kind().as_str(), "dataset validation failed");
    }
    outcome
}

fn shape_error(kind: ErrorKind, shape: Shape<'_>) -> ValidateError {
    let name = shape.type_name().unwrap_or_default();
    ValidateError::new(kind, vec![("type", name.to_string())])
}

fn element_error(kind: ErrorKind, element: &Value) -> ValidateError {
    ValidateError::new(kind, vec![("type", type_name(element).to_string())])
}

fn column_error(kind: ErrorKind, column: &str) -> ValidateError {
    ValidateError::new(kind, vec![("column", column.to_string())])
}

/// The synchronous check sequence. See the crate docs for the order.
pub(crate) fn run_checks(value: &Value, config: &ValidatorConfig) -> Result<()> {
    let dataset = Dataset::new(value);

    // dataset.data: present, an array, an array of row objects.
    let rows = match Shape::of(dataset.data()) {
        Shape::Missing => return Err(ValidateError::bare(ErrorKind::DataMissing)),
        Shape::Sequence(rows) => rows,
        other => return Err(shape_error(ErrorKind::DataNotArray, other)),
    };

    let scanned = match config.row_scan {
        RowScan::AllRows => rows,
        RowScan::FirstRowOnly => &rows[..rows.len().min(1)],
    };

    for row in scanned {
        if !matches!(row, Value::Object(_)) {
            return Err(element_error(ErrorKind::DataNotArrayOfObjects, row));
        }
    }

    // dataset.metadata: present, an object, with a columns array of
    // column descriptor objects.
    let metadata = match Shape::of(dataset.metadata()) {
        Shape::Missing => return Err(ValidateError::bare(ErrorKind::MetadataMissing)),
        Shape::Record(map) => map,
        other => return Err(shape_error(ErrorKind::MetadataNotObject, other)),
    };

    let columns = match Shape::of(metadata.get("columns")) {
        Shape::Missing => return Err(ValidateError::bare(ErrorKind::MetadataMissingColumns)),
        Shape::Sequence(columns) => columns,
        other => return Err(shape_error(ErrorKind::MetadataColumnsNotArray, other)),
    };

    let mut descriptors = Vec::with_capacity(columns.len());
    for column in columns {
        match column {
            Value::Object(map) => descriptors.push(map),
            other => {
                return Err(element_error(
                    ErrorKind::MetadataColumnsNotArrayOfObjects,
                    other,
                ))
            }
        }
    }

    // Descriptor fields. Three separate passes so a violation of an
    // earlier check is reported even when a later-check violation sits
    // on an earlier descriptor.
    if descriptors
        .iter()
        .any(|descriptor| !Shape::of(descriptor.get("name")).is_present())
    {
        return Err(ValidateError::bare(ErrorKind::MetadataColumnsNameMissing));
    }

    if descriptors
        .iter()
        .any(|descriptor| !matches!(descriptor.get("name"), Some(Value::String(_))))
    {
        return Err(ValidateError::bare(ErrorKind::MetadataColumnsNameNotString));
    }

    let mut declared: Vec<&str> = Vec::with_capacity(descriptors.len());
    for descriptor in &descriptors {
        let name = match descriptor.get("name") {
            Some(Value::String(name)) => name.as_str(),
            // Unreachable after the name passes above.
            _ => "",
        };
        if !Shape::of(descriptor.get("type")).is_present() {
            return Err(column_error(ErrorKind::MetadataColumnsTypeMissing, name));
        }
        declared.push(name);
    }

    // Cross-reference declared columns against observed row keys, both
    // directions. An empty dataset observes no keys and is left alone —
    // there are no rows to disagree with the declaration.
    if scanned.is_empty() {
        return Ok(());
    }

    let declared_set: HashSet<&str> = declared.iter().copied().collect();
    let mut observed: HashSet<&str> = HashSet::new();

    for row in scanned {
        if let Value::Object(row) = row {
            for key in row.keys() {
                if !declared_set.contains(key.as_str()) {
                    return Err(column_error(ErrorKind::ColumnInDataNotMetadata, key));
                }
                observed.insert(key.as_str());
            }
        }
    }

    for name in declared {
        if !observed.contains(name) {
            return Err(column_error(ErrorKind::ColumnInMetadataNotData, name));
        }
    }

    Ok(())
}
