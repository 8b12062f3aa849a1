//! Generic column type codes.
//!
//! Numbering follows the JDBC `java.sql.Types` constants, which is what
//! standard metadata introspection reports and what destination type
//! catalogs key their entries by.

pub const BIT: i32 = -7;
pub const TINYINT: i32 = -6;
pub const BIGINT: i32 = -5;
pub const LONGVARBINARY: i32 = -4;
pub const VARBINARY: i32 = -3;
pub const BINARY: i32 = -2;
pub const LONGVARCHAR: i32 = -1;
pub const CHAR: i32 = 1;
pub const NUMERIC: i32 = 2;
pub const DECIMAL: i32 = 3;
pub const INTEGER: i32 = 4;
pub const SMALLINT: i32 = 5;
pub const FLOAT: i32 = 6;
pub const REAL: i32 = 7;
pub const DOUBLE: i32 = 8;
pub const VARCHAR: i32 = 12;
pub const BOOLEAN: i32 = 16;
pub const DATE: i32 = 91;
pub const TIME: i32 = 92;
pub const TIMESTAMP: i32 = 93;
pub const BLOB: i32 = 2004;
pub const CLOB: i32 = 2005;

/// Code for types no generic bucket covers.
pub const OTHER: i32 = 1111;

/// Map a vendor-native type name, as reported by information-schema style
/// introspection, to a generic code. Unknown names map to [`OTHER`].
pub fn from_name(name: &str) -> i32 {
    match name.trim().to_ascii_lowercase().as_str() {
        "bit" => BIT,
        "tinyint" => TINYINT,
        "smallint" | "int2" => SMALLINT,
        "int" | "integer" | "mediumint" | "int4" | "serial" => INTEGER,
        "bigint" | "int8" | "bigserial" => BIGINT,
        "decimal" | "numeric" | "number" | "money" => DECIMAL,
        "float" | "double" | "double precision" | "float8" | "binary_double" => DOUBLE,
        "real" | "float4" | "binary_float" => REAL,
        "char" | "character" | "nchar" | "bpchar" => CHAR,
        "varchar" | "character varying" | "nvarchar" | "varchar2" | "nvarchar2" => VARCHAR,
        "text" | "tinytext" | "mediumtext" | "longtext" | "clob" | "nclob" | "ntext" => CLOB,
        "date" => DATE,
        "time" | "time without time zone" | "timetz" => TIME,
        "datetime" | "datetime2" | "smalldatetime" | "timestamp" | "timestamptz"
        | "timestamp without time zone" | "timestamp with time zone" => TIMESTAMP,
        "binary" => BINARY,
        "varbinary" | "raw" => VARBINARY,
        "blob" | "tinyblob" | "mediumblob" | "longblob" | "bytea" | "image" | "long raw" => BLOB,
        "boolean" | "bool" => BOOLEAN,
        _ => OTHER,
    }
}
