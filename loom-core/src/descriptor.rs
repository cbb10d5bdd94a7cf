//! Schema-derived type descriptors.
//!
//! A [`TypeDescriptor`] is what the host pipeline hands to the resolver for
//! every property, parameter or model field. Descriptors also have a compact
//! text form used on the command line and in input files:
//!
//! ```text
//! integer
//! array<string>
//! map<array<ref:Pet>>
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinds;

/// Prefix marking a model reference in the text form (`ref:Pet`).
pub const MODEL_PREFIX: &str = "ref:";

/// A language-agnostic description of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    /// An abstract scalar kind (`string`, `integer`, `object`, ...).
    Scalar(String),
    /// A homogeneous array of the inner descriptor.
    ArrayOf(Box<TypeDescriptor>),
    /// A string-keyed map whose values are the inner descriptor.
    MapOf(Box<TypeDescriptor>),
    /// A reference to a generated model, rendered verbatim.
    Named(String),
}

impl TypeDescriptor {
    /// Create a scalar descriptor.
    pub fn scalar(kind: impl Into<String>) -> Self {
        Self::Scalar(kind.into())
    }

    /// Create an array descriptor.
    pub fn array(element: TypeDescriptor) -> Self {
        Self::ArrayOf(Box::new(element))
    }

    /// Create a map descriptor.
    pub fn map(value: TypeDescriptor) -> Self {
        Self::MapOf(Box::new(value))
    }

    /// Create a model reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Check if this descriptor is an array or a map.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::ArrayOf(_) | Self::MapOf(_))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{}", kind),
            Self::ArrayOf(inner) => write!(f, "{}<{}>", kinds::ARRAY, inner),
            Self::MapOf(inner) => write!(f, "{}<{}>", kinds::MAP, inner),
            Self::Named(name) => write!(f, "{}{}", MODEL_PREFIX, name),
        }
    }
}

impl From<TypeDescriptor> for String {
    fn from(descriptor: TypeDescriptor) -> Self {
        descriptor.to_string()
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for TypeDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { src: s, pos: 0 };
        let descriptor = parser.descriptor()?;
        parser.skip_whitespace();
        if parser.pos != s.len() {
            return Err(DescriptorError::TrailingInput {
                input: s.to_string(),
                pos: parser.pos,
            });
        }
        Ok(descriptor)
    }
}

/// Error returned when a descriptor's text form cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("expected a type kind at offset {pos} in '{input}'")]
    MissingKind { input: String, pos: usize },

    #[error("expected '{expected}' at offset {pos} in '{input}'")]
    Expected {
        input: String,
        expected: char,
        pos: usize,
    },

    #[error("'{kind}' does not take a type parameter (only 'array' and 'map' do)")]
    NotGeneric { kind: String },

    #[error("unexpected input at offset {pos} in '{input}'")]
    TrailingInput { input: String, pos: usize },
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn word(&mut self) -> &'a str {
        self.skip_whitespace();
        let src = self.src;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '<' || c == '>' {
                break;
            }
            self.pos += c.len_utf8();
        }
        &src[start..self.pos]
    }

    fn expect(&mut self, expected: char) -> Result<(), DescriptorError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(DescriptorError::Expected {
                input: self.src.to_string(),
                expected,
                pos: self.pos,
            })
        }
    }

    fn missing_kind(&self) -> DescriptorError {
        DescriptorError::MissingKind {
            input: self.src.to_string(),
            pos: self.pos,
        }
    }

    fn descriptor(&mut self) -> Result<TypeDescriptor, DescriptorError> {
        let word = self.word();
        if word.is_empty() {
            return Err(self.missing_kind());
        }

        if let Some(name) = word.strip_prefix(MODEL_PREFIX) {
            if name.is_empty() {
                return Err(self.missing_kind());
            }
            return Ok(TypeDescriptor::named(name));
        }

        self.skip_whitespace();
        if self.peek() != Some('<') {
            return Ok(TypeDescriptor::scalar(word));
        }

        let wrap: fn(TypeDescriptor) -> TypeDescriptor = match word {
            kinds::ARRAY => TypeDescriptor::array,
            kinds::MAP => TypeDescriptor::map,
            other => {
                return Err(DescriptorError::NotGeneric {
                    kind: other.to_string(),
                });
            }
        };

        self.expect('<')?;
        let inner = self.descriptor()?;
        self.expect('>')?;
        Ok(wrap(inner))
    }
}
