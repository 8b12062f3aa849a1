//! Paginated data transfer with per-row commit discipline.
//!
//! Pages through the source with the source dialect's pagination rewrite
//! and feeds one prepared destination INSERT, committing after every row.
//! The single-row transaction boundary trades throughput for
//! partial-progress durability; there is no resume watermark, so re-running
//! a job after a mid-table failure re-copies the whole table and duplicates
//! the rows already committed.

use tracing::{debug, info};

use crate::access::{runner, Connection};
use crate::core::Column;
use crate::dialect::{Dialect, DialectImpl};
use crate::error::{Result, SyncError};
use crate::sqlutil;

/// Rows fetched per source page during transfer. Fixed, independent of the
/// dialect's interactive page size.
pub const SYNC_BATCH_SIZE: u64 = 1000;

/// Totals for one table's transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Rows copied and committed.
    pub rows: u64,
    /// Source pages read.
    pub pages: u64,
}

/// Copies all rows of one table from source to destination.
pub struct DataTransfer<'a> {
    pub source: &'a dyn Connection,
    pub dest: &'a dyn Connection,
    pub source_dialect: &'a DialectImpl,
}

impl DataTransfer<'_> {
    /// Move every source row into the destination using exactly `columns`,
    /// in that order, committing once per row.
    ///
    /// Values bind positionally by column-name match against the source
    /// row; a destination column absent from the source row is an error.
    /// The prepared statement and each page's rows are dropped on every
    /// exit path.
    pub fn copy_rows(&self, table: &str, columns: &[Column]) -> Result<TransferStats> {
        let insert = sqlutil::insert_sql(table, columns);
        let statement = self.dest.prepare(&insert)?;

        let select = sqlutil::select_sql(table);
        let total = self.row_count(table, &select)?;
        let pages = total_pages(total, SYNC_BATCH_SIZE);
        debug!(table, rows = total, pages, "starting transfer");

        let mut stats = TransferStats::default();
        for page_no in 1..=pages {
            let page_sql = self
                .source_dialect
                .page_query(&select, page_no, SYNC_BATCH_SIZE)?;
            let page = self.source.query(&page_sql)?;
            for row in &page {
                let mut params = Vec::with_capacity(columns.len());
                for column in columns {
                    let value = row.get(&column.name).cloned().ok_or_else(|| {
                        SyncError::transfer(
                            table,
                            format!("source row is missing column '{}'", column.name),
                        )
                    })?;
                    params.push(value);
                }
                statement.execute(&params)?;
                self.dest.commit()?;
                stats.rows += 1;
            }
            stats.pages = page_no;
        }

        info!(table, rows = stats.rows, pages = stats.pages, "transfer complete");
        Ok(stats)
    }

    fn row_count(&self, table: &str, select: &str) -> Result<i64> {
        let count = sqlutil::count_sql(select);
        let scalars = runner::query_scalar_i64s(self.source, &count)?;
        scalars
            .first()
            .copied()
            .ok_or_else(|| SyncError::transfer(table, "count query returned no rows"))
    }
}

/// Total 1-based pages needed to cover `count` rows, never less than one.
pub fn total_pages(count: i64, batch: u64) -> u64 {
    if count <= 0 {
        return 1;
    }
    (count as u64).div_ceil(batch)
}
