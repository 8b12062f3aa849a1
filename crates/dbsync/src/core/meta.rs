//! Schema metadata types.
//!
//! These are the database-agnostic shapes the engine works with: the table
//! list from the source, column descriptors from metadata introspection,
//! and the destination's self-reported type catalog entries.

use serde::{Deserialize, Serialize};

/// A table as reported by a dialect's table-list query.
///
/// Only the name participates in synchronization; the comment is carried
/// through for the enclosing platform's listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,

    /// Vendor table comment, when the vendor reports one.
    #[serde(default)]
    pub comment: Option<String>,
}

impl Table {
    /// Create a table entry with no comment.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
        }
    }
}

/// A column descriptor from standard metadata introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Generic type code (see [`crate::core::typecode`]).
    pub type_code: i32,

    /// Column size / numeric precision; zero when the vendor reports none.
    pub precision: i64,

    /// Decimal digits / numeric scale; zero when the vendor reports none.
    pub scale: i64,
}

impl Column {
    /// Create a column descriptor.
    pub fn new(name: impl Into<String>, type_code: i32, precision: i64, scale: i64) -> Self {
        Self {
            name: name.into(),
            type_code,
            precision,
            scale,
        }
    }
}

/// One entry of a destination database's self-reported type catalog.
///
/// Maps a generic type code to the vendor-native column type and its DDL
/// parameter template. Multiple entries may share a code; catalog order
/// decides which one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Generic type code this entry answers for.
    pub type_code: i32,

    /// Vendor-native type name emitted into DDL.
    pub native_name: String,

    /// Parameter template with `M` (precision) and `,D` (scale)
    /// placeholders, e.g. `[(M[,D])] [UNSIGNED] [ZEROFILL]`.
    #[serde(default)]
    pub create_params: Option<String>,

    /// Precision used when the source column reports zero.
    pub default_precision: i64,

    /// Scale used when the source column reports zero.
    pub default_scale: i64,
}
