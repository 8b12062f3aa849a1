//! PostgreSQL dialect.

use super::Dialect;
use crate::error::Result;

/// PostgreSQL dialect. Introspects the `public` schema of the configured
/// database.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Create a new PostgreSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn driver_identifier(&self) -> &str {
        "postgres"
    }

    fn connection_url(&self, host: &str, port: u16, database: &str) -> String {
        format!("postgres://{host}:{port}/{database}")
    }

    fn table_list_query(&self, database: &str) -> String {
        format!(
            "SELECT table_name AS TABLE_NAME, NULL AS TABLE_COMMENT \
             FROM information_schema.tables \
             WHERE table_catalog = '{database}' AND table_schema = 'public' \
             ORDER BY table_name"
        )
    }

    fn column_list_query(&self, database: &str, table: &str) -> String {
        format!(
            "SELECT column_name AS COLUMN_NAME, data_type AS DATA_TYPE, \
             COALESCE(character_maximum_length, numeric_precision, 0) AS COLUMN_SIZE, \
             COALESCE(numeric_scale, 0) AS DECIMAL_DIGITS \
             FROM information_schema.columns \
             WHERE table_catalog = '{database}' AND table_schema = 'public' \
             AND table_name = '{table}' \
             ORDER BY ordinal_position"
        )
    }

    fn page_query(&self, sql: &str, page_no: u64, page_size: u64) -> Result<String> {
        let offset = page_no.saturating_sub(1) * page_size;
        Ok(format!("{sql} LIMIT {page_size} OFFSET {offset}"))
    }
}
