//! # dbsync
//!
//! Cross-vendor database synchronization engine: replicate every table of a
//! source database into a destination database, structure first, data
//! second.
//!
//! The engine is vendor-agnostic at its core and supports:
//!
//! - **Schema replication** driven by the destination's self-reported type
//!   catalog, never a hardcoded vendor-to-vendor type table
//! - **Dialect strategies** for MySQL/MariaDB, PostgreSQL, Oracle, and
//!   SQL Server metadata and pagination SQL
//! - **Paginated transfer** in fixed 1000-row pages with a commit after
//!   every inserted row, so progress survives a mid-table failure
//! - **Per-table skip recovery**: a table whose creation fails is reported
//!   and skipped while the rest of the job continues
//!
//! Connections come from the enclosing platform through the
//! [`ConnectionProvider`] seam; the engine itself never opens sockets.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dbsync::{ConnectionProvider, SyncJob, SyncOrchestrator};
//!
//! fn sync(provider: Arc<dyn ConnectionProvider>) -> dbsync::Result<()> {
//!     let job = SyncJob {
//!         principal: "admin".into(),
//!         source: "orders-mysql".into(),
//!         dest: "orders-pg".into(),
//!         force_recreate: false,
//!     };
//!     let report = SyncOrchestrator::new(provider).run(&job)?;
//!     println!("{}", report.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod config;
pub mod core;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod orchestrator;
pub mod schema;
pub mod sqlutil;
pub mod transfer;

#[cfg(test)]
mod testkit;

// Re-exports for convenient access
pub use access::{Connection, ConnectionProvider, Statement};
pub use config::{ConnectionDescriptor, SyncJob};
pub use crate::core::{Column, Row, SqlValue, Table, TypeInfo};
pub use ddl::TypeCatalog;
pub use dialect::{Dialect, DialectImpl};
pub use error::{Result, SyncError};
pub use orchestrator::{SyncOrchestrator, SyncReport, TableReport};
pub use schema::{SchemaOutcome, SchemaReplicator, TableStatus};
pub use transfer::{DataTransfer, TransferStats, SYNC_BATCH_SIZE};
