//! Thin statement-runner helpers shared by schema replication and transfer.

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::access::Connection;
use crate::core::SqlValue;
use crate::error::{Result, SyncError};

/// Execute a DDL or DML statement, returning the affected row count.
pub fn execute_update(conn: &dyn Connection, sql: &str) -> Result<u64> {
    debug!(sql, "executing update");
    conn.execute(sql)
}

/// Run a query expected to yield one integer column, e.g. a COUNT rewrite.
/// Returns the scalars in row order.
pub fn query_scalar_i64s(conn: &dyn Connection, sql: &str) -> Result<Vec<i64>> {
    debug!(sql, "executing scalar query");
    let rows = conn.query(sql)?;
    rows.iter()
        .map(|row| {
            row.values().first().and_then(scalar_i64).ok_or_else(|| {
                SyncError::data_access(format!("query did not yield an integer scalar: {sql}"))
            })
        })
        .collect()
}

fn scalar_i64(value: &SqlValue) -> Option<i64> {
    match value {
        SqlValue::Int(v) => Some(*v),
        SqlValue::Decimal(v) => v.to_i64(),
        SqlValue::Float(v) => Some(*v as i64),
        SqlValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}
