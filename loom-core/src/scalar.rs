//! Target scalar classification.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of a target-language scalar type.
///
/// Each target type name is classified once, when its tables are built.
/// Downstream predicates switch on this tag instead of inspecting the type
/// name, so renaming a target type never changes how it is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ScalarKind {
    String,
    Char,
    Boolean,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    Decimal,
    DateTime,
    DateTimeOffset,
    Uuid,
    Binary,
    Stream,
    Object,
}

impl ScalarKind {
    /// Every scalar kind, in declaration order.
    pub const ALL: &'static [ScalarKind] = &[
        Self::String,
        Self::Char,
        Self::Boolean,
        Self::Byte,
        Self::SByte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::DateTime,
        Self::DateTimeOffset,
        Self::Uuid,
        Self::Binary,
        Self::Stream,
        Self::Object,
    ];

    /// Get the name used for this kind in table files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::DateTime => "date_time",
            Self::DateTimeOffset => "date_time_offset",
            Self::Uuid => "uuid",
            Self::Binary => "binary",
            Self::Stream => "stream",
            Self::Object => "object",
        }
    }

    /// Integral kinds that may appear unquoted as enum member values.
    ///
    /// Only 32/64-bit signed integers and bytes qualify. Unsigned and
    /// 16-bit integers are rendered as quoted literals.
    pub fn is_enum_integral(&self) -> bool {
        matches!(self, Self::Int32 | Self::Int64 | Self::Byte)
    }

    /// Floating point and decimal kinds.
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Float | Self::Double | Self::Decimal)
    }

    /// Kinds whose enum member values must be rendered as string literals
    /// even though the schema may present them as numbers.
    pub fn is_string_like_for_enum(&self) -> bool {
        matches!(self, Self::String) || self.is_floating()
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ScalarKind> for &'static str {
    fn from(kind: ScalarKind) -> Self {
        kind.as_str()
    }
}

impl TryFrom<String> for ScalarKind {
    type Error = UnknownScalarKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error returned when parsing an unrecognised scalar kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scalar kind '{0}'")]
pub struct UnknownScalarKind(pub String);

impl FromStr for ScalarKind {
    type Err = UnknownScalarKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownScalarKind(s.to_string()))
    }
}
