//! Error catalog and message templater.
//!
//! Every failure kind has exactly one message template. Templates use
//! `%token%` placeholders filled from the failing check's parameters.
//! The identifiers and placeholder names are a stable interop surface —
//! callers match on them, so they never change spelling.

/// Machine-readable identifier for one failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `dataset.data` is absent.
    DataMissing,
    /// `dataset.data` is not an array.
    DataNotArray,
    /// `dataset.data` contains a non-object element.
    DataNotArrayOfObjects,
    /// `dataset.metadata` is absent.
    MetadataMissing,
    /// `dataset.metadata` is not an object.
    MetadataNotObject,
    /// `dataset.metadata.columns` is absent.
    MetadataMissingColumns,
    /// `dataset.metadata.columns` is not an array.
    MetadataColumnsNotArray,
    /// `dataset.metadata.columns` contains a non-object element.
    MetadataColumnsNotArrayOfObjects,
    /// A column descriptor has no `name` field.
    MetadataColumnsNameMissing,
    /// A column descriptor's `name` is not a string.
    MetadataColumnsNameNotString,
    /// A column descriptor has no `type` field.
    MetadataColumnsTypeMissing,
    /// A data column has no matching descriptor.
    ColumnInDataNotMetadata,
    /// A declared descriptor matches no data column.
    ColumnInMetadataNotData,
    /// Lookup helper: no descriptor with the requested name.
    ColumnMetadataMissing,
}

impl ErrorKind {
    /// The stable snake_case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::DataMissing => "data_missing",
            ErrorKind::DataNotArray => "data_not_array",
            ErrorKind::DataNotArrayOfObjects => "data_not_array_of_objects",
            ErrorKind::MetadataMissing => "metadata_missing",
            ErrorKind::MetadataNotObject => "metadata_not_object",
            ErrorKind::MetadataMissingColumns => "metadata_missing_columns",
            ErrorKind::MetadataColumnsNotArray => "metadata_columns_not_array",
            ErrorKind::MetadataColumnsNotArrayOfObjects => "metadata_columns_not_array_of_objects",
            ErrorKind::MetadataColumnsNameMissing => "metadata_columns_name_missing",
            ErrorKind::MetadataColumnsNameNotString => "metadata_columns_name_not_string",
            ErrorKind::MetadataColumnsTypeMissing => "metadata_columns_type_missing",
            ErrorKind::ColumnInDataNotMetadata => "column_in_data_not_metadata",
            ErrorKind::ColumnInMetadataNotData => "column_in_metadata_not_data",
            ErrorKind::ColumnMetadataMissing => "column_metadata_missing",
        }
    }

    /// The message template for this kind.
    pub fn template(self) -> &'static str {
        match self {
            ErrorKind::DataMissing => "The dataset.data property does not exist.",
            ErrorKind::DataNotArray => {
                "The dataset.data property is not an array, its type is '%type%'."
            }
            ErrorKind::DataNotArrayOfObjects => {
                "The dataset.data property is not an array of row objects, \
                 it is an array whose elements are of type '%type%'."
            }
            ErrorKind::MetadataMissing => "The dataset.metadata property is missing.",
            ErrorKind::MetadataNotObject => {
                "The dataset.metadata property is not an object, its type is '%type%'."
            }
            ErrorKind::MetadataMissingColumns => {
                "The dataset.metadata.columns property is missing."
            }
            ErrorKind::MetadataColumnsNotArray => {
                "The dataset.metadata.columns property is not an array, its type is '%type%'."
            }
            ErrorKind::MetadataColumnsNotArrayOfObjects => {
                "The dataset.metadata.columns property is not an array of column \
                 descriptor objects, it is an array whose elements are of type '%type%'."
            }
            ErrorKind::MetadataColumnsNameMissing => {
                "A column descriptor in dataset.metadata.columns is missing its 'name' property."
            }
            ErrorKind::MetadataColumnsNameNotString => {
                "A column descriptor in dataset.metadata.columns has a 'name' that is not a string."
            }
            ErrorKind::MetadataColumnsTypeMissing => {
                "The column '%column%' in dataset.metadata.columns is missing \
                 its 'type' property."
            }
            ErrorKind::ColumnInDataNotMetadata => {
                "The column '%column%' is present in the data, but there is no entry \
                 for it in dataset.metadata.columns."
            }
            ErrorKind::ColumnInMetadataNotData => {
                "The column '%column%' is present in dataset.metadata.columns, but this \
                 column is missing from the row objects in dataset.data."
            }
            ErrorKind::ColumnMetadataMissing => {
                "There is no entry for the column '%column%' in dataset.metadata.columns."
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All catalog entries, for callers enumerating the surface.
pub const ALL_KINDS: [ErrorKind; 14] = [
    ErrorKind::DataMissing,
    ErrorKind::DataNotArray,
    ErrorKind::DataNotArrayOfObjects,
    ErrorKind::MetadataMissing,
    ErrorKind::MetadataNotObject,
    ErrorKind::MetadataMissingColumns,
    ErrorKind::MetadataColumnsNotArray,
    ErrorKind::MetadataColumnsNotArrayOfObjects,
    ErrorKind::MetadataColumnsNameMissing,
    ErrorKind::MetadataColumnsNameNotString,
    ErrorKind::MetadataColumnsTypeMissing,
    ErrorKind::ColumnInDataNotMetadata,
    ErrorKind::ColumnInMetadataNotData,
    ErrorKind::ColumnMetadataMissing,
];

/// Substitute `%token%` placeholders with the matching named parameters.
///
/// A placeholder with no matching parameter renders as the empty string.
/// The catalog is closed and every call site supplies the placeholders it
/// uses, so the empty fallback is never load-bearing; it exists so a
/// mismatch degrades the message instead of failing the failure path.
/// A `%` not followed by a terminated token passes through literally.
pub fn render(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(end) if after[..end].chars().all(|c| c.is_alphanumeric() || c == '_') => {
                let token = &after[..end];
                if let Some((_, value)) = params.iter().find(|(name, _)| *name == token) {
                    out.push_str(value);
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
