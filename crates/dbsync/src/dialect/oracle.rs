//! Oracle dialect.

use super::Dialect;
use crate::error::Result;

/// Oracle dialect. The configured database name is treated as the schema
/// owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl OracleDialect {
    /// Create a new Oracle dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &str {
        "oracle"
    }

    fn driver_identifier(&self) -> &str {
        "oracle"
    }

    fn connection_url(&self, host: &str, port: u16, database: &str) -> String {
        format!("oracle://{host}:{port}/{database}")
    }

    fn table_list_query(&self, database: &str) -> String {
        format!(
            "SELECT TABLE_NAME, NULL AS TABLE_COMMENT \
             FROM ALL_TABLES \
             WHERE OWNER = UPPER('{database}') \
             ORDER BY TABLE_NAME"
        )
    }

    fn column_list_query(&self, database: &str, table: &str) -> String {
        format!(
            "SELECT COLUMN_NAME, DATA_TYPE, \
             NVL(DATA_PRECISION, DATA_LENGTH) AS COLUMN_SIZE, \
             NVL(DATA_SCALE, 0) AS DECIMAL_DIGITS \
             FROM ALL_TAB_COLUMNS \
             WHERE OWNER = UPPER('{database}') AND TABLE_NAME = '{table}' \
             ORDER BY COLUMN_ID"
        )
    }

    fn page_query(&self, sql: &str, page_no: u64, page_size: u64) -> Result<String> {
        // Nested ROWNUM window; plain `ROWNUM > n` never matches.
        let hi = page_no * page_size;
        let lo = page_no.saturating_sub(1) * page_size;
        Ok(format!(
            "SELECT * FROM (SELECT __q.*, ROWNUM AS __rn FROM ({sql}) __q \
             WHERE ROWNUM <= {hi}) WHERE __rn > {lo}"
        ))
    }
}
