//! Column widths declared on grid tables.

use ecow::{eco_format, EcoString};

use crate::ast::{ColumnWidth, Table};

/// Normalizes a declared width into a CSS length.
///
/// Widths that already carry a `%` or a letter (`"50%"`, `"12em"`, `"auto"`)
/// pass through unchanged, as does anything that is not a finite number.
/// Numbers up to 1 are ratios and become percentages; larger numbers are
/// pixel counts. A numeric width below `1e-6` or from `1e21` up renders in
/// exponent form (`1e-7`) and so passes through as text.
///
/// ```rust
/// use mdast_export::rewrite::normalize_width;
/// use mdast_export::ast::ColumnWidth;
///
/// assert_eq!(normalize_width(&ColumnWidth::Number(0.5)), "50%");
/// assert_eq!(normalize_width(&ColumnWidth::Number(300.0)), "300px");
/// assert_eq!(normalize_width(&"auto".into()), "auto");
/// ```
pub fn normalize_width(width: &ColumnWidth) -> EcoString {
    let text = eco_format!("{width}");
    if text.contains('%') || text.chars().any(char::is_alphabetic) {
        return text;
    }

    let value = match width {
        ColumnWidth::Number(value) => Some(*value),
        ColumnWidth::Text(text) => text.trim().parse::<f64>().ok(),
    };

    match value {
        // A unitless 1 is read as 100%, not 1px.
        Some(value) if value.is_finite() && value <= 1.0 => eco_format!("{}%", value * 100.0),
        Some(value) if value.is_finite() => eco_format!("{value}px"),
        _ => text,
    }
}

/// Why the declared widths of a table cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthMismatch {
    /// The table carries no width list
    Missing,
    /// The width list is empty
    Empty,
    /// The table has no rows
    NoRows,
    /// The width list does not match the first row
    Count {
        /// Number of declared widths
        declared: usize,
        /// Number of cells in the first row
        columns: usize,
    },
}

/// Returns the normalized column widths of a table, or why there are none.
pub fn try_extract_column_widths(table: &Table) -> Result<Vec<EcoString>, WidthMismatch> {
    let widths = table
        .meta
        .as_ref()
        .and_then(|meta| meta.col_widths.as_ref())
        .ok_or(WidthMismatch::Missing)?;

    if widths.is_empty() {
        return Err(WidthMismatch::Empty);
    }
    if table.rows.is_empty() {
        return Err(WidthMismatch::NoRows);
    }

    let columns = table.column_count();
    if widths.len() != columns {
        return Err(WidthMismatch::Count {
            declared: widths.len(),
            columns,
        });
    }

    Ok(widths.iter().map(normalize_width).collect())
}

/// Returns the normalized column widths of a table, if they are usable.
pub fn extract_column_widths(table: &Table) -> Option<Vec<EcoString>> {
    try_extract_column_widths(table).ok()
}
