//! MySQL/MariaDB dialect.

use super::Dialect;
use crate::error::Result;

/// MySQL dialect. Stateless; compatible with MySQL 5.7+ and MariaDB.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Create a new MySQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn driver_identifier(&self) -> &str {
        "mysql"
    }

    fn connection_url(&self, host: &str, port: u16, database: &str) -> String {
        format!("mysql://{host}:{port}/{database}")
    }

    fn table_list_query(&self, database: &str) -> String {
        format!(
            "SELECT TABLE_NAME, CREATE_TIME, UPDATE_TIME, TABLE_COMMENT \
             FROM information_schema.TABLES \
             WHERE TABLE_SCHEMA = '{database}' \
             ORDER BY TABLE_NAME"
        )
    }

    fn column_list_query(&self, database: &str, table: &str) -> String {
        format!(
            "SELECT COLUMN_NAME, DATA_TYPE, \
             COALESCE(CHARACTER_MAXIMUM_LENGTH, NUMERIC_PRECISION, 0) AS COLUMN_SIZE, \
             COALESCE(NUMERIC_SCALE, 0) AS DECIMAL_DIGITS \
             FROM information_schema.COLUMNS \
             WHERE TABLE_SCHEMA = '{database}' AND TABLE_NAME = '{table}' \
             ORDER BY ORDINAL_POSITION"
        )
    }

    fn page_query(&self, sql: &str, page_no: u64, page_size: u64) -> Result<String> {
        let offset = page_no.saturating_sub(1) * page_size;
        Ok(format!("{sql} LIMIT {offset},{page_size}"))
    }
}
