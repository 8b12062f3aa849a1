//! Destination DDL generation from the self-reported type catalog.
//!
//! A freshly created destination table gets its column types from the
//! destination's own type catalog, keyed by the source column's generic
//! type code. The engine never hardcodes a vendor-to-vendor type table.

use crate::core::{Column, TypeInfo};

/// Type emitted when the destination reports no catalog entry for a
/// column's generic code. Always valid, lossy.
const FALLBACK_TYPE: &str = "BLOB";

/// The destination's self-reported type catalog, in catalog order.
///
/// Multiple entries may share a generic code; the first one wins. Loaded
/// once per job and discarded at release.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    entries: Vec<TypeInfo>,
}

impl TypeCatalog {
    /// Create a catalog preserving the given order.
    pub fn new(entries: Vec<TypeInfo>) -> Self {
        Self { entries }
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries (every column then falls back
    /// to [`FALLBACK_TYPE`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First catalog-order entry matching the generic code.
    pub fn find(&self, type_code: i32) -> Option<&TypeInfo> {
        self.entries.iter().find(|t| t.type_code == type_code)
    }

    /// Render one column as a `name TYPE[(params)]` DDL fragment.
    pub fn resolve_column_ddl(&self, column: &Column) -> String {
        let mut ddl = String::new();
        ddl.push_str(&column.name);
        ddl.push(' ');
        match self.find(column.type_code) {
            None => ddl.push_str(FALLBACK_TYPE),
            Some(info) => {
                ddl.push_str(&info.native_name);
                if let Some(template) = info.create_params.as_deref() {
                    if !template.trim().is_empty() {
                        ddl.push_str(&render_params(template, column, info));
                    }
                }
            }
        }
        ddl
    }
}

/// Substitute the `M` (precision) and `,D` (scale) placeholders, then strip
/// every character that is not a digit, comma, or parenthesis. The template
/// text is vendor-supplied and never emitted verbatim.
///
/// The scale match is the literal `,D` substring; a template using another
/// separator skips scale substitution entirely. A source precision or scale
/// of zero is indistinguishable from absent and takes the catalog entry's
/// default.
fn render_params(template: &str, column: &Column, info: &TypeInfo) -> String {
    let mut params = template.to_string();
    if params.contains('M') {
        let precision = if column.precision == 0 {
            info.default_precision
        } else {
            column.precision
        };
        params = params.replace('M', &precision.to_string());
    }
    if params.contains(",D") {
        let scale = if column.scale == 0 {
            info.default_scale
        } else {
            column.scale
        };
        params = params.replace(",D", &format!(",{scale}"));
    }
    params
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '(' | ')'))
        .collect()
}

/// Build the CREATE TABLE statement for a fresh destination table.
pub fn create_table_sql(table: &str, columns: &[Column], catalog: &TypeCatalog) -> String {
    let fields: Vec<String> = columns
        .iter()
        .map(|c| catalog.resolve_column_ddl(c))
        .collect();
    format!("CREATE TABLE {}({})", table, fields.join(","))
}
