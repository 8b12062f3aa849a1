//! Destination schema replication.
//!
//! Brings one destination table to a usable state before data transfer and
//! reports which column list governs the copy. Failed creation is reported
//! as a value, not an error, so the orchestrator continues with the
//! remaining tables.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::access::{rowmap, runner, Connection};
use crate::core::Column;
use crate::ddl::{self, TypeCatalog};
use crate::dialect::{Dialect, DialectImpl};
use crate::error::{Result, SyncError};
use crate::sqlutil;

/// How the destination table was brought to a usable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    /// Created fresh from the source structure.
    Created,
    /// Pre-existing destination table reused as-is; no reconciliation
    /// against the source structure is performed.
    Reused,
    /// Creation failed; the table carries no columns and data transfer is
    /// not attempted.
    Skipped,
}

/// Outcome of replicating one table's structure.
#[derive(Debug, Clone)]
pub struct SchemaOutcome {
    /// Table name.
    pub table: String,

    /// How the destination was prepared.
    pub status: TableStatus,

    /// Columns governing data transfer: the source's after a fresh create,
    /// otherwise the destination's existing list. Empty means skip.
    pub columns: Vec<Column>,

    /// Failure message for [`TableStatus::Skipped`].
    pub cause: Option<String>,
}

/// Ensures a destination table exists with a usable column list, optionally
/// recreating it.
pub struct SchemaReplicator<'a> {
    pub source: &'a dyn Connection,
    pub dest: &'a dyn Connection,
    pub source_dialect: &'a DialectImpl,
    pub dest_dialect: &'a DialectImpl,
    pub source_db: &'a str,
    pub dest_db: &'a str,
    pub catalog: &'a TypeCatalog,
}

impl SchemaReplicator<'_> {
    /// Bring `table` to a usable state on the destination.
    ///
    /// Decision table:
    /// - absent → CREATE from source columns
    /// - present, `force` → DROP, then CREATE from source columns
    /// - present, not `force` → reuse existing destination columns
    ///
    /// CREATE failure is recovered locally into [`TableStatus::Skipped`];
    /// the table is never left partially created. Introspection and DROP
    /// failures propagate and abort the job.
    pub fn ensure(&self, table: &str, force: bool) -> Result<SchemaOutcome> {
        let dest_columns = self.introspect(self.dest, self.dest_dialect, self.dest_db, table)?;
        let existed = !dest_columns.is_empty();

        if existed && force {
            debug!(table, "dropping destination table before recreate");
            runner::execute_update(self.dest, &sqlutil::drop_table_sql(table))?;
        }

        if existed && !force {
            debug!(
                table,
                columns = dest_columns.len(),
                "reusing existing destination table"
            );
            return Ok(SchemaOutcome {
                table: table.to_string(),
                status: TableStatus::Reused,
                columns: dest_columns,
                cause: None,
            });
        }

        let source_columns =
            self.introspect(self.source, self.source_dialect, self.source_db, table)?;
        let create = ddl::create_table_sql(table, &source_columns, self.catalog);
        match runner::execute_update(self.dest, &create) {
            Ok(_) => {
                info!(
                    table,
                    columns = source_columns.len(),
                    "destination table created"
                );
                Ok(SchemaOutcome {
                    table: table.to_string(),
                    status: TableStatus::Created,
                    columns: source_columns,
                    cause: None,
                })
            }
            Err(e) => {
                let cause = SyncError::schema(table, e.to_string());
                error!(table, error = %cause, "table creation failed; skipping table");
                Ok(SchemaOutcome {
                    table: table.to_string(),
                    status: TableStatus::Skipped,
                    columns: Vec::new(),
                    cause: Some(cause.to_string()),
                })
            }
        }
    }

    fn introspect(
        &self,
        conn: &dyn Connection,
        dialect: &DialectImpl,
        database: &str,
        table: &str,
    ) -> Result<Vec<Column>> {
        let rows = conn.query(&dialect.column_list_query(database, table))?;
        Ok(rowmap::columns(&rows))
    }
}
