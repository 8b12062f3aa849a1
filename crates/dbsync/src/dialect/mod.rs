//! Vendor SQL dialect strategies.
//!
//! Every per-vendor syntax difference the engine depends on lives behind the
//! [`Dialect`] trait: connectivity descriptors, metadata queries, and
//! pagination rewriting. Orchestration, schema replication, and transfer
//! stay vendor-agnostic.
//!
//! # Dispatch
//!
//! The vendor set is closed, so [`DialectImpl`] provides enum-based static
//! dispatch; [`DialectImpl::from_vendor`] is the registry lookup from a
//! vendor identifier to its strategy.

mod mssql;
mod mysql;
mod oracle;
mod postgres;

pub use mssql::MssqlDialect;
pub use mysql::MysqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;

use crate::error::{Result, SyncError};

/// SQL syntax and connectivity strategy for one database vendor.
///
/// Implementations are stateless; one instance serves any number of jobs.
pub trait Dialect: Send + Sync {
    /// Vendor identifier used for registry lookup and logging.
    fn name(&self) -> &str;

    /// Client driver token the connection layer loads for this vendor.
    fn driver_identifier(&self) -> &str;

    /// Connection URL for the vendor's client.
    fn connection_url(&self, host: &str, port: u16, database: &str) -> String;

    /// Query returning the database's tables in a stable order.
    ///
    /// Result columns: `TABLE_NAME`, plus vendor metadata (timestamps,
    /// comments) the sync core ignores.
    fn table_list_query(&self, database: &str) -> String;

    /// Query returning one row per column of `table`, aliased to the
    /// standard introspection names (`COLUMN_NAME`, `DATA_TYPE`,
    /// `COLUMN_SIZE`, `DECIMAL_DIGITS`), in ordinal order.
    fn column_list_query(&self, database: &str, table: &str) -> String;

    /// Default page size for interactive result browsing. Data transfer
    /// uses its own fixed batch size instead.
    fn default_page_size(&self) -> u32 {
        100
    }

    /// Rewrite `sql` to return rows `[(page_no - 1) * page_size,
    /// page_no * page_size)`; page numbers are 1-based.
    ///
    /// Dialects without pagination keep this default and fail only when
    /// data transfer is attempted; metadata-only use is unaffected.
    fn page_query(&self, _sql: &str, _page_no: u64, _page_size: u64) -> Result<String> {
        Err(SyncError::UnsupportedPagination {
            dialect: self.name().to_string(),
        })
    }
}

/// Enum-based static dispatch over the closed vendor set.
#[derive(Debug, Clone)]
pub enum DialectImpl {
    Mysql(MysqlDialect),
    Postgres(PostgresDialect),
    Oracle(OracleDialect),
    Mssql(MssqlDialect),
}

impl DialectImpl {
    /// Look up the strategy for a vendor identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Vendor`] for unrecognized identifiers.
    pub fn from_vendor(vendor: &str) -> Result<Self> {
        match vendor.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DialectImpl::Mysql(MysqlDialect::new())),
            "postgres" | "postgresql" | "pg" => Ok(DialectImpl::Postgres(PostgresDialect::new())),
            "oracle" => Ok(DialectImpl::Oracle(OracleDialect::new())),
            "mssql" | "sqlserver" | "sql_server" => Ok(DialectImpl::Mssql(MssqlDialect::new())),
            other => Err(SyncError::Vendor(other.to_string())),
        }
    }
}

impl Dialect for DialectImpl {
    fn name(&self) -> &str {
        match self {
            DialectImpl::Mysql(d) => d.name(),
            DialectImpl::Postgres(d) => d.name(),
            DialectImpl::Oracle(d) => d.name(),
            DialectImpl::Mssql(d) => d.name(),
        }
    }

    fn driver_identifier(&self) -> &str {
        match self {
            DialectImpl::Mysql(d) => d.driver_identifier(),
            DialectImpl::Postgres(d) => d.driver_identifier(),
            DialectImpl::Oracle(d) => d.driver_identifier(),
            DialectImpl::Mssql(d) => d.driver_identifier(),
        }
    }

    fn connection_url(&self, host: &str, port: u16, database: &str) -> String {
        match self {
            DialectImpl::Mysql(d) => d.connection_url(host, port, database),
            DialectImpl::Postgres(d) => d.connection_url(host, port, database),
            DialectImpl::Oracle(d) => d.connection_url(host, port, database),
            DialectImpl::Mssql(d) => d.connection_url(host, port, database),
        }
    }

    fn table_list_query(&self, database: &str) -> String {
        match self {
            DialectImpl::Mysql(d) => d.table_list_query(database),
            DialectImpl::Postgres(d) => d.table_list_query(database),
            DialectImpl::Oracle(d) => d.table_list_query(database),
            DialectImpl::Mssql(d) => d.table_list_query(database),
        }
    }

    fn column_list_query(&self, database: &str, table: &str) -> String {
        match self {
            DialectImpl::Mysql(d) => d.column_list_query(database, table),
            DialectImpl::Postgres(d) => d.column_list_query(database, table),
            DialectImpl::Oracle(d) => d.column_list_query(database, table),
            DialectImpl::Mssql(d) => d.column_list_query(database, table),
        }
    }

    fn default_page_size(&self) -> u32 {
        match self {
            DialectImpl::Mysql(d) => d.default_page_size(),
            DialectImpl::Postgres(d) => d.default_page_size(),
            DialectImpl::Oracle(d) => d.default_page_size(),
            DialectImpl::Mssql(d) => d.default_page_size(),
        }
    }

    fn page_query(&self, sql: &str, page_no: u64, page_size: u64) -> Result<String> {
        match self {
            DialectImpl::Mysql(d) => d.page_query(sql, page_no, page_size),
            DialectImpl::Postgres(d) => d.page_query(sql, page_no, page_size),
            DialectImpl::Oracle(d) => d.page_query(sql, page_no, page_size),
            DialectImpl::Mssql(d) => d.page_query(sql, page_no, page_size),
        }
    }
}
