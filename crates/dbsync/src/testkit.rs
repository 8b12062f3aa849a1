//! In-memory database fakes for unit tests.
//!
//! [`MemConnection`] understands exactly the SQL shapes the engine emits
//! against a MySQL source or destination: information_schema metadata
//! queries, the COUNT wrap, `LIMIT offset,n` pagination, CREATE/DROP TABLE,
//! and parameterized INSERT. Anything else is an error, so a test fails
//! loudly if the engine's SQL drifts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::access::{Connection, ConnectionProvider, Statement};
use crate::config::ConnectionDescriptor;
use crate::core::{typecode, Column, Row, SqlValue, TypeInfo};
use crate::error::{Result, SyncError};

/// One in-memory table: declared columns plus rows in column order.
#[derive(Debug, Clone)]
pub struct MemTable {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl MemTable {
    pub fn new(name: &str, columns: Vec<Column>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }
}

/// Shared state behind one or more [`MemConnection`]s.
#[derive(Debug, Default)]
pub struct MemDb {
    pub tables: Vec<MemTable>,
    /// Table names whose CREATE TABLE must fail.
    pub fail_create: Vec<String>,
    /// Refuse to serve the type catalog.
    pub fail_type_catalog: bool,
    /// Every executed DDL statement, in order.
    pub ddl_log: Vec<String>,
    /// Commit count.
    pub commits: usize,
    /// Last manual-commit setting.
    pub manual_commit: bool,
    pending: Vec<(String, Vec<SqlValue>)>,
}

impl MemDb {
    pub fn table(&self, name: &str) -> Option<&MemTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    fn table_mut(&mut self, name: &str) -> Option<&mut MemTable> {
        self.tables.iter_mut().find(|t| t.name == name)
    }
}

/// Build a shared in-memory database over the given tables.
pub fn mem_db(tables: Vec<MemTable>) -> Arc<Mutex<MemDb>> {
    Arc::new(Mutex::new(MemDb {
        tables,
        ..MemDb::default()
    }))
}

/// A row of the canonical two-column (`id`, `name`) test table.
pub fn row_of(i: i64) -> Vec<SqlValue> {
    vec![SqlValue::Int(i), SqlValue::Text(format!("name-{i}"))]
}

/// The type catalog entries a MySQL destination reports, as metadata
/// values.
pub fn mysql_type_catalog_infos() -> Vec<TypeInfo> {
    let info = |code, name: &str, params: Option<&str>, prec, scale| TypeInfo {
        type_code: code,
        native_name: name.to_string(),
        create_params: params.map(str::to_string),
        default_precision: prec,
        default_scale: scale,
    };
    vec![
        info(typecode::INTEGER, "INT", Some("[(M)] [UNSIGNED] [ZEROFILL]"), 10, 0),
        info(
            typecode::DECIMAL,
            "DECIMAL",
            Some("[(M[,D])] [UNSIGNED] [ZEROFILL]"),
            10,
            0,
        ),
        info(typecode::VARCHAR, "VARCHAR", Some("(M)"), 255, 0),
        info(typecode::TIMESTAMP, "DATETIME", None, 0, 0),
    ]
}

fn type_catalog_rows() -> Vec<Row> {
    mysql_type_catalog_infos()
        .into_iter()
        .map(|info| {
            Row::new(
                vec![
                    "TYPE_NAME".into(),
                    "DATA_TYPE".into(),
                    "CREATE_PARAMS".into(),
                    "PRECISION".into(),
                    "MINIMUM_SCALE".into(),
                ],
                vec![
                    SqlValue::Text(info.native_name),
                    SqlValue::Int(info.type_code as i64),
                    info.create_params.map_or(SqlValue::Null, SqlValue::Text),
                    SqlValue::Int(info.default_precision),
                    SqlValue::Int(info.default_scale),
                ],
            )
        })
        .collect()
}

/// A connection over a shared [`MemDb`].
pub struct MemConnection {
    db: Arc<Mutex<MemDb>>,
}

impl MemConnection {
    pub fn over(db: Arc<Mutex<MemDb>>) -> Self {
        Self { db }
    }
}

fn unsupported(sql: &str) -> SyncError {
    SyncError::data_access(format!("testkit does not understand: {sql}"))
}

/// Text between `pattern` and the next `terminator`.
fn between<'a>(sql: &'a str, pattern: &str, terminator: char) -> Option<&'a str> {
    let start = sql.find(pattern)? + pattern.len();
    let rest = &sql[start..];
    let end = rest.find(terminator).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

impl Connection for MemConnection {
    fn query(&self, sql: &str) -> Result<Vec<Row>> {
        let db = self.db.lock().unwrap();
        let lower = sql.to_ascii_lowercase();

        if lower.contains("information_schema.columns") {
            let table = between(sql, "TABLE_NAME = '", '\'').ok_or_else(|| unsupported(sql))?;
            let columns = db.table(table).map(|t| t.columns.clone()).unwrap_or_default();
            return Ok(columns
                .iter()
                .map(|c| {
                    Row::new(
                        vec![
                            "COLUMN_NAME".into(),
                            "DATA_TYPE".into(),
                            "COLUMN_SIZE".into(),
                            "DECIMAL_DIGITS".into(),
                        ],
                        vec![
                            SqlValue::Text(c.name.clone()),
                            SqlValue::Int(c.type_code as i64),
                            SqlValue::Int(c.precision),
                            SqlValue::Int(c.scale),
                        ],
                    )
                })
                .collect());
        }

        if lower.contains("information_schema.tables") {
            return Ok(db
                .tables
                .iter()
                .map(|t| {
                    Row::new(
                        vec!["TABLE_NAME".into(), "TABLE_COMMENT".into()],
                        vec![SqlValue::Text(t.name.clone()), SqlValue::Text(String::new())],
                    )
                })
                .collect());
        }

        if let Some(inner) = between(sql, "SELECT COUNT(1) FROM (SELECT * FROM ", ')') {
            let count = db.table(inner).map_or(0, |t| t.rows.len());
            return Ok(vec![Row::new(
                vec!["COUNT(1)".into()],
                vec![SqlValue::Int(count as i64)],
            )]);
        }

        if let Some(table) = between(sql, "SELECT * FROM ", ' ') {
            let limits = between(sql, " LIMIT ", '\0').ok_or_else(|| unsupported(sql))?;
            let (offset, size) = limits.split_once(',').ok_or_else(|| unsupported(sql))?;
            let offset: usize = offset.trim().parse().map_err(|_| unsupported(sql))?;
            let size: usize = size.trim().parse().map_err(|_| unsupported(sql))?;
            let t = db.table(table).ok_or_else(|| unsupported(sql))?;
            let names: Vec<String> = t.columns.iter().map(|c| c.name.clone()).collect();
            return Ok(t
                .rows
                .iter()
                .skip(offset)
                .take(size)
                .map(|values| Row::new(names.clone(), values.clone()))
                .collect());
        }

        Err(unsupported(sql))
    }

    fn execute(&self, sql: &str) -> Result<u64> {
        let mut db = self.db.lock().unwrap();

        if let Some(table) = sql.strip_prefix("DROP TABLE ") {
            let table = table.trim().to_string();
            db.ddl_log.push(sql.to_string());
            db.tables.retain(|t| t.name != table);
            return Ok(0);
        }

        if sql.starts_with("CREATE TABLE ") {
            let name = between(sql, "CREATE TABLE ", '(').ok_or_else(|| unsupported(sql))?;
            if db.fail_create.iter().any(|t| t == name) {
                return Err(SyncError::data_access(format!(
                    "table {name} rejected by destination"
                )));
            }
            db.ddl_log.push(sql.to_string());
            let body = between(sql, "(", '\0').ok_or_else(|| unsupported(sql))?;
            let body = body.strip_suffix(')').unwrap_or(body);
            let columns = split_top_level(body)
                .iter()
                .filter_map(|fragment| fragment.split_whitespace().next())
                .map(|name| Column::new(name, typecode::OTHER, 0, 0))
                .collect();
            let name = name.to_string();
            db.tables.push(MemTable::new(&name, columns));
            return Ok(0);
        }

        Err(unsupported(sql))
    }

    fn prepare<'a>(&'a self, sql: &str) -> Result<Box<dyn Statement + 'a>> {
        let table = between(sql, "INSERT INTO ", '(')
            .ok_or_else(|| unsupported(sql))?
            .to_string();
        let columns: Vec<String> = between(sql, "(", ')')
            .ok_or_else(|| unsupported(sql))?
            .split(',')
            .map(|c| c.trim().to_string())
            .collect();
        Ok(Box::new(MemStatement {
            db: self.db.clone(),
            table,
            columns,
        }))
    }

    fn set_manual_commit(&self, manual: bool) -> Result<()> {
        self.db.lock().unwrap().manual_commit = manual;
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        let mut db = self.db.lock().unwrap();
        let pending = std::mem::take(&mut db.pending);
        for (table, row) in pending {
            if let Some(t) = db.table_mut(&table) {
                t.rows.push(row);
            }
        }
        db.commits += 1;
        Ok(())
    }

    fn type_catalog(&self) -> Result<Vec<Row>> {
        if self.db.lock().unwrap().fail_type_catalog {
            return Err(SyncError::data_access("type catalog unavailable"));
        }
        Ok(type_catalog_rows())
    }
}

/// Split a CREATE TABLE body on commas outside parentheses.
fn split_top_level(body: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in body.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current);
    }
    parts
}

struct MemStatement {
    db: Arc<Mutex<MemDb>>,
    table: String,
    columns: Vec<String>,
}

impl Statement for MemStatement {
    fn execute(&self, params: &[SqlValue]) -> Result<u64> {
        if params.len() != self.columns.len() {
            return Err(SyncError::data_access(format!(
                "expected {} parameters, got {}",
                self.columns.len(),
                params.len()
            )));
        }
        let mut db = self.db.lock().unwrap();
        let target = db
            .table(&self.table)
            .ok_or_else(|| SyncError::data_access(format!("no such table: {}", self.table)))?;
        // Reorder the bound values into the target table's column order.
        let row: Vec<SqlValue> = target
            .columns
            .iter()
            .map(|c| {
                self.columns
                    .iter()
                    .position(|name| name.eq_ignore_ascii_case(&c.name))
                    .map_or(SqlValue::Null, |i| params[i].clone())
            })
            .collect();
        let table = self.table.clone();
        db.pending.push((table, row));
        Ok(1)
    }
}

/// Connection provider over named in-memory databases.
pub struct MemProvider {
    pub dbs: HashMap<String, Arc<Mutex<MemDb>>>,
    pub descriptors: HashMap<String, ConnectionDescriptor>,
    /// Connection names whose acquisition must fail.
    pub fail_acquire: Vec<String>,
    /// Connections handed back via release.
    pub released: Arc<AtomicUsize>,
}

impl MemProvider {
    /// Provider with a MySQL source named `src` and a MySQL destination
    /// named `dst`.
    pub fn with_mysql_pair(src: Arc<Mutex<MemDb>>, dest: Arc<Mutex<MemDb>>) -> Self {
        let descriptor = |database: &str| ConnectionDescriptor {
            vendor: "mysql".into(),
            database: database.into(),
            host: "localhost".into(),
            port: 3306,
            credential: None,
        };
        Self {
            dbs: HashMap::from([("src".to_string(), src), ("dst".to_string(), dest)]),
            descriptors: HashMap::from([
                ("src".to_string(), descriptor("srcdb")),
                ("dst".to_string(), descriptor("dstdb")),
            ]),
            fail_acquire: Vec::new(),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ConnectionProvider for MemProvider {
    fn acquire(&self, _principal: &str, name: &str) -> Result<Box<dyn Connection>> {
        if self.fail_acquire.iter().any(|n| n == name) {
            return Err(SyncError::connectivity(name, "connection refused"));
        }
        let db = self
            .dbs
            .get(name)
            .ok_or_else(|| SyncError::connectivity(name, "unknown connection"))?;
        Ok(Box::new(MemConnection::over(db.clone())))
    }

    fn descriptor(&self, _principal: &str, name: &str) -> Result<ConnectionDescriptor> {
        self.descriptors
            .get(name)
            .cloned()
            .ok_or_else(|| SyncError::connectivity(name, "unknown connection"))
    }

    fn release(&self, conn: Box<dyn Connection>) {
        drop(conn);
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
