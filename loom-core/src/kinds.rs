//! Well-known abstract kind names.
//!
//! These are the schema-level type names a host pipeline hands to the
//! resolver. Targets are free to map additional kinds; these constants only
//! name the ones every built-in target understands.

pub const STRING: &str = "string";
pub const BOOLEAN: &str = "boolean";
pub const INTEGER: &str = "integer";
pub const LONG: &str = "long";
pub const FLOAT: &str = "float";
pub const DOUBLE: &str = "double";
pub const NUMBER: &str = "number";
pub const BIG_DECIMAL: &str = "BigDecimal";
pub const DATE: &str = "date";
pub const DATE_TIME: &str = "DateTime";
pub const BINARY: &str = "binary";
pub const BYTE_ARRAY: &str = "ByteArray";
pub const FILE: &str = "file";
pub const OBJECT: &str = "object";
pub const UUID: &str = "UUID";
pub const URI: &str = "URI";
pub const ARRAY: &str = "array";
pub const LIST: &str = "list";
pub const MAP: &str = "map";

/// Kinds that describe a collection rather than a scalar value.
pub const CONTAINER_KINDS: &[&str] = &[ARRAY, LIST, MAP];

/// Check if an abstract kind names a collection.
pub fn is_container_kind(kind: &str) -> bool {
    CONTAINER_KINDS.contains(&kind)
}
