//! Job orchestration: connect, enumerate, replicate, transfer, release.
//!
//! One run walks `INIT → (per table: SCHEMA → [SKIP | DATA]) → RELEASE`,
//! strictly sequentially. The orchestrator holds only the shared connection
//! provider; connections and the type catalog are private to a single run,
//! so independent jobs may run concurrently on separate threads.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::access::{rowmap, Connection, ConnectionProvider};
use crate::config::{ConnectionDescriptor, SyncJob};
use crate::ddl::TypeCatalog;
use crate::dialect::{Dialect, DialectImpl};
use crate::error::{Result, SyncError};
use crate::schema::{SchemaReplicator, TableStatus};
use crate::transfer::DataTransfer;

/// Drives one synchronization job end to end.
pub struct SyncOrchestrator {
    provider: Arc<dyn ConnectionProvider>,
}

/// Result of one table within a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    /// Table name.
    pub table: String,

    /// How the destination table was prepared.
    pub status: TableStatus,

    /// Rows copied and committed.
    pub rows: u64,

    /// Failure message for skipped tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// Result of a completed synchronization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Unique run identifier.
    pub run_id: String,

    /// `success` when every table transferred, `partial` when at least one
    /// table was skipped.
    pub status: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// When the run completed.
    pub completed_at: DateTime<Utc>,

    /// Total duration in seconds.
    pub duration_seconds: f64,

    /// Tables enumerated on the source.
    pub tables_total: usize,

    /// Tables created fresh on the destination.
    pub tables_created: usize,

    /// Pre-existing destination tables reused.
    pub tables_reused: usize,

    /// Tables skipped after a recovered schema failure.
    pub tables_skipped: usize,

    /// Total rows copied across all tables.
    pub rows_copied: u64,

    /// Per-table outcomes, in processing order.
    pub tables: Vec<TableReport>,
}

impl SyncReport {
    /// Convert to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SyncOrchestrator {
    /// Create an orchestrator over the platform's connection provider.
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Run one job to completion.
    ///
    /// Every failure escaping the per-table schema-skip recovery surfaces
    /// as the single job-level [`SyncError::Job`] wrapper; no data-access
    /// error type crosses this boundary unwrapped.
    pub fn run(&self, job: &SyncJob) -> Result<SyncReport> {
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();
        info!(
            run_id = %run_id,
            source = %job.source,
            dest = %job.dest,
            force_recreate = job.force_recreate,
            "starting sync job"
        );

        match self.run_connected(job, &run_id, started_at) {
            Ok(report) => {
                info!(
                    run_id = %run_id,
                    tables = report.tables_total,
                    rows = report.rows_copied,
                    skipped = report.tables_skipped,
                    duration_seconds = report.duration_seconds,
                    "sync job completed"
                );
                Ok(report)
            }
            Err(e) => {
                error!(run_id = %run_id, error = %e, "sync job failed");
                Err(SyncError::Job(Box::new(e)))
            }
        }
    }

    /// Acquire both connections, run the job body, and release both
    /// unconditionally on every path.
    fn run_connected(
        &self,
        job: &SyncJob,
        run_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<SyncReport> {
        let src_desc = self.provider.descriptor(&job.principal, &job.source)?;
        let dest_desc = self.provider.descriptor(&job.principal, &job.dest)?;
        let source_dialect = DialectImpl::from_vendor(&src_desc.vendor)?;
        let dest_dialect = DialectImpl::from_vendor(&dest_desc.vendor)?;

        let source = self.provider.acquire(&job.principal, &job.source)?;
        let dest = match self.provider.acquire(&job.principal, &job.dest) {
            Ok(conn) => conn,
            Err(e) => {
                self.provider.release(source);
                return Err(e);
            }
        };

        let outcome = self.sync_tables(
            job,
            run_id,
            started_at,
            &*source,
            &*dest,
            &source_dialect,
            &dest_dialect,
            &src_desc,
            &dest_desc,
        );

        self.provider.release(source);
        self.provider.release(dest);
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    fn sync_tables(
        &self,
        job: &SyncJob,
        run_id: &str,
        started_at: DateTime<Utc>,
        source: &dyn Connection,
        dest: &dyn Connection,
        source_dialect: &DialectImpl,
        dest_dialect: &DialectImpl,
        src_desc: &ConnectionDescriptor,
        dest_desc: &ConnectionDescriptor,
    ) -> Result<SyncReport> {
        let catalog = Self::init_destination(dest);

        let table_rows = source.query(&source_dialect.table_list_query(&src_desc.database))?;
        let tables = rowmap::tables(&table_rows);
        info!(
            count = tables.len(),
            database = %src_desc.database,
            "enumerated source tables"
        );

        let replicator = SchemaReplicator {
            source,
            dest,
            source_dialect,
            dest_dialect,
            source_db: &src_desc.database,
            dest_db: &dest_desc.database,
            catalog: &catalog,
        };
        let transfer = DataTransfer {
            source,
            dest,
            source_dialect,
        };

        let mut reports = Vec::with_capacity(tables.len());
        for table in &tables {
            let outcome = replicator.ensure(&table.name, job.force_recreate)?;
            let mut report = TableReport {
                table: table.name.clone(),
                status: outcome.status,
                rows: 0,
                cause: outcome.cause,
            };
            if !outcome.columns.is_empty() {
                let stats = transfer.copy_rows(&table.name, &outcome.columns)?;
                report.rows = stats.rows;
            }
            reports.push(report);
        }

        let completed_at = Utc::now();
        let count_status = |status: TableStatus| {
            reports.iter().filter(|r| r.status == status).count()
        };
        let skipped = count_status(TableStatus::Skipped);
        Ok(SyncReport {
            run_id: run_id.to_string(),
            status: if skipped == 0 { "success" } else { "partial" }.to_string(),
            started_at,
            completed_at,
            duration_seconds: (completed_at - started_at).num_milliseconds() as f64 / 1000.0,
            tables_total: reports.len(),
            tables_created: count_status(TableStatus::Created),
            tables_reused: count_status(TableStatus::Reused),
            tables_skipped: skipped,
            rows_copied: reports.iter().map(|r| r.rows).sum(),
            tables: reports,
        })
    }

    /// Load the destination type catalog and switch the destination to
    /// manual commit.
    ///
    /// Failure here is logged and leaves the catalog empty, sending every
    /// created column through the lossy fallback type; the job still runs.
    fn init_destination(dest: &dyn Connection) -> TypeCatalog {
        let loaded = dest.type_catalog().and_then(|rows| {
            dest.set_manual_commit(true)?;
            Ok(rows)
        });
        match loaded {
            Ok(rows) => {
                let catalog = TypeCatalog::new(rowmap::type_infos(&rows));
                debug!(entries = catalog.len(), "loaded destination type catalog");
                catalog
            }
            Err(e) => {
                warn!(error = %e, "destination init failed; continuing with empty type catalog");
                TypeCatalog::default()
            }
        }
    }
}
