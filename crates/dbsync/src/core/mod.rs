//! Vendor-neutral core types shared across the engine.

pub mod meta;
pub mod typecode;
pub mod value;

pub use meta::{Column, Table, TypeInfo};
pub use value::{Row, SqlValue};
