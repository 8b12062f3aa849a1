//! SQL Server dialect.
//!
//! Metadata introspection only: this dialect does not override
//! [`Dialect::page_query`], so using a SQL Server connection as a transfer
//! source fails with `UnsupportedPagination` when the first page is
//! requested.

use super::Dialect;

/// SQL Server dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlDialect;

impl MssqlDialect {
    /// Create a new SQL Server dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MssqlDialect {
    fn name(&self) -> &str {
        "mssql"
    }

    fn driver_identifier(&self) -> &str {
        "tiberius"
    }

    fn connection_url(&self, host: &str, port: u16, database: &str) -> String {
        format!("sqlserver://{host}:{port}/{database}")
    }

    fn table_list_query(&self, _database: &str) -> String {
        "SELECT name AS TABLE_NAME, create_date AS CREATE_TIME, \
         modify_date AS UPDATE_TIME \
         FROM sys.tables ORDER BY name"
            .to_string()
    }

    fn column_list_query(&self, database: &str, table: &str) -> String {
        format!(
            "SELECT COLUMN_NAME, DATA_TYPE, \
             COALESCE(CHARACTER_MAXIMUM_LENGTH, NUMERIC_PRECISION, 0) AS COLUMN_SIZE, \
             COALESCE(NUMERIC_SCALE, 0) AS DECIMAL_DIGITS \
             FROM INFORMATION_SCHEMA.COLUMNS \
             WHERE TABLE_CATALOG = '{database}' AND TABLE_NAME = '{table}' \
             ORDER BY ORDINAL_POSITION"
        )
    }
}
