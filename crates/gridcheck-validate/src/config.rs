/// How many rows the per-row checks inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowScan {
    /// Inspect every row. Catches a violation anywhere in the data.
    #[default]
    AllRows,
    /// Inspect only the first row, treating it as representative.
    /// An explicit performance policy for very large datasets — a
    /// violation that first appears in a later row goes undetected.
    FirstRowOnly,
}

/// Controls validator behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorConfig {
    /// Row-inspection breadth for the element-shape and cross-reference
    /// checks.
    pub row_scan: RowScan,
}
