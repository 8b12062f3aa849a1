//! Job and connection configuration consumed from the enclosing platform.

use serde::{Deserialize, Serialize};

/// One synchronization job: replicate every source table into the
/// destination.
///
/// Immutable input to a single run. Construct a fresh value per run and do
/// not reuse it; the core never persists jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJob {
    /// Principal owning the persisted connection configurations.
    pub principal: String,

    /// Name of the source connection configuration.
    pub source: String,

    /// Name of the destination connection configuration.
    pub dest: String,

    /// Drop and rebuild destination tables that already exist.
    #[serde(default)]
    pub force_recreate: bool,
}

/// Vendor and endpoint details of a persisted connection configuration.
///
/// Resolved by the connection provider; the core only reads the vendor
/// identifier (dialect lookup) and the database name (metadata queries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Vendor identifier, e.g. "mysql" or "postgres".
    pub vendor: String,

    /// Database (schema/owner for vendors that conflate the two).
    pub database: String,

    /// Server host.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Reference to stored credentials; resolved by the connection
    /// provider, never by the core.
    #[serde(default)]
    pub credential: Option<String>,
}
