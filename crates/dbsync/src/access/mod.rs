//! Collaborator seams for connection acquisition and statement execution.
//!
//! The core never talks to a database driver directly. The enclosing
//! platform supplies a [`ConnectionProvider`] that hands out live, blocking
//! [`Connection`]s; the engine drives them with SQL text produced by the
//! dialect strategies and the builders in [`crate::sqlutil`] and
//! [`crate::ddl`].

pub mod rowmap;
pub mod runner;

use crate::config::ConnectionDescriptor;
use crate::core::{Row, SqlValue};
use crate::error::Result;

/// A live, blocking database connection.
///
/// All methods take `&self`; implementations use interior synchronization,
/// as drivers do. One connection is owned by exactly one job at a time.
pub trait Connection: Send {
    /// Run a query and materialize every row.
    fn query(&self, sql: &str) -> Result<Vec<Row>>;

    /// Execute a DDL or update statement. Auto-commits individually,
    /// regardless of the manual-commit setting for row writes.
    fn execute(&self, sql: &str) -> Result<u64>;

    /// Prepare a parameterized statement for repeated execution.
    fn prepare<'a>(&'a self, sql: &str) -> Result<Box<dyn Statement + 'a>>;

    /// Switch row writes between manual and automatic commit.
    fn set_manual_commit(&self, manual: bool) -> Result<()>;

    /// Commit the open transaction (manual-commit mode).
    fn commit(&self) -> Result<()>;

    /// The connection's self-reported type catalog, one row per native
    /// type, in catalog order.
    fn type_catalog(&self) -> Result<Vec<Row>>;
}

/// A prepared statement bound to one connection.
pub trait Statement {
    /// Execute with positional parameters; returns the affected row count.
    /// The driver performs implicit type conversion on binding.
    fn execute(&self, params: &[SqlValue]) -> Result<u64>;
}

/// Hands out and reclaims live connections for a principal's named,
/// persisted connection configurations.
pub trait ConnectionProvider: Send + Sync {
    /// Open (or check out) a connection for the named configuration.
    fn acquire(&self, principal: &str, name: &str) -> Result<Box<dyn Connection>>;

    /// Resolve the named configuration's descriptor without connecting.
    fn descriptor(&self, principal: &str, name: &str) -> Result<ConnectionDescriptor>;

    /// Return a connection; the provider closes or pools it.
    fn release(&self, conn: Box<dyn Connection>);
}
