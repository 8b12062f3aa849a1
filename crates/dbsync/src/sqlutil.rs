//! SQL text builders shared by schema replication and data transfer.
//!
//! Table and column names flow from metadata introspection and are emitted
//! unquoted, as the original namespace reported them.

use crate::core::Column;

/// `SELECT *` base query for a table; the dialect applies pagination.
pub fn select_sql(table: &str) -> String {
    format!("SELECT * FROM {table}")
}

/// DROP TABLE statement.
pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE {table}")
}

/// Parameterized INSERT over exactly `columns`, in that order.
pub fn insert_sql(table: &str, columns: &[Column]) -> String {
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let placeholders = vec!["?"; columns.len()].join(",");
    format!(
        "INSERT INTO {}({}) VALUES({})",
        table,
        names.join(","),
        placeholders
    )
}

/// Rewrite a SELECT into the COUNT query used to derive total pages.
/// Pure text transform; wraps rather than parses.
pub fn count_sql(select: &str) -> String {
    format!("SELECT COUNT(1) FROM ({select}) __total")
}
