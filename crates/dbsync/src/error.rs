//! Error types for the synchronization core.

use thiserror::Error;

/// Main error type for sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A connection or its descriptor could not be obtained.
    #[error("Connectivity failure for '{name}': {message}")]
    Connectivity { name: String, message: String },

    /// Unknown vendor identifier at dialect lookup.
    #[error("Unknown database vendor: '{0}'. Supported vendors: mysql, postgres, oracle, mssql")]
    Vendor(String),

    /// DDL execution failed for one table; the table is skipped and the
    /// job continues.
    #[error("Schema creation failed for table {table}: {message}")]
    SchemaCreation { table: String, message: String },

    /// Pagination requested on a dialect that does not implement it.
    #[error("Dialect '{dialect}' does not support pagination")]
    UnsupportedPagination { dialect: String },

    /// Data transfer failed for a specific table.
    #[error("Transfer failed for table {table}: {message}")]
    Transfer { table: String, message: String },

    /// Driver-level data access failure reported by a collaborator.
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// JSON serialization error (report output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Uniform job-level wrapper: every failure escaping a run surfaces
    /// as this variant, never as a raw data-access error.
    #[error("Sync job failed: {0}")]
    Job(#[source] Box<SyncError>),
}

impl SyncError {
    /// Create a Connectivity error for a named connection.
    pub fn connectivity(name: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::Connectivity {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a SchemaCreation error.
    pub fn schema(table: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::SchemaCreation {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a Transfer error.
    pub fn transfer(table: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::Transfer {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a driver-level DataAccess error.
    pub fn data_access(message: impl Into<String>) -> Self {
        SyncError::DataAccess(message.into())
    }
}

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
