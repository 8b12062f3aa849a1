//! Result-set to metadata mapping.
//!
//! Dialect queries alias their result columns to the standard introspection
//! names (`TABLE_NAME`, `COLUMN_NAME`, `DATA_TYPE`, ...). These mappers
//! materialize the core's metadata types from such rows, tolerating the two
//! shapes of `DATA_TYPE` seen across vendors: a numeric generic code or a
//! native type name.

use crate::core::{typecode, Column, Row, SqlValue, Table, TypeInfo};

/// Materialize the table list from a table-list query result, preserving
/// result order.
pub fn tables(rows: &[Row]) -> Vec<Table> {
    rows.iter()
        .filter_map(|row| {
            let name = text(row, "TABLE_NAME")?;
            Some(Table {
                name,
                comment: text(row, "TABLE_COMMENT"),
            })
        })
        .collect()
}

/// Materialize column descriptors from a column-list query result,
/// preserving ordinal order.
pub fn columns(rows: &[Row]) -> Vec<Column> {
    rows.iter()
        .filter_map(|row| {
            let name = text(row, "COLUMN_NAME")?;
            Some(Column {
                name,
                type_code: type_code(row),
                precision: integer(row, "COLUMN_SIZE").unwrap_or(0),
                scale: integer(row, "DECIMAL_DIGITS").unwrap_or(0),
            })
        })
        .collect()
}

/// Materialize the destination type catalog, preserving catalog order.
///
/// `LOCAL_TYPE_NAME` wins over `TYPE_NAME` when both are present; some
/// drivers only fill the latter.
pub fn type_infos(rows: &[Row]) -> Vec<TypeInfo> {
    rows.iter()
        .filter_map(|row| {
            let native_name = text(row, "LOCAL_TYPE_NAME").or_else(|| text(row, "TYPE_NAME"))?;
            Some(TypeInfo {
                type_code: type_code(row),
                native_name,
                create_params: text(row, "CREATE_PARAMS"),
                default_precision: integer(row, "PRECISION").unwrap_or(0),
                default_scale: integer(row, "MINIMUM_SCALE").unwrap_or(0),
            })
        })
        .collect()
}

fn type_code(row: &Row) -> i32 {
    match row.get("DATA_TYPE") {
        Some(SqlValue::Int(v)) => *v as i32,
        Some(SqlValue::Text(s)) => s
            .trim()
            .parse()
            .unwrap_or_else(|_| typecode::from_name(s)),
        _ => typecode::OTHER,
    }
}

fn text(row: &Row, key: &str) -> Option<String> {
    match row.get(key) {
        Some(SqlValue::Text(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn integer(row: &Row, key: &str) -> Option<i64> {
    match row.get(key)? {
        SqlValue::Int(v) => Some(*v),
        SqlValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}
