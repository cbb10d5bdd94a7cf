//! Core types for typeloom.
//!
//! This crate provides the language-agnostic vocabulary shared by the
//! resolver, the table file format and the target crates.

mod descriptor;
mod scalar;
mod utils;

pub mod kinds;

pub use descriptor::{DescriptorError, MODEL_PREFIX, TypeDescriptor};
pub use scalar::{ScalarKind, UnknownScalarKind};
pub use utils::to_pascal_case;
