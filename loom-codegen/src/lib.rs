//! Type tables, resolver and generation driver for typeloom.
//!
//! This crate provides the language-agnostic half of typeloom. Target crates
//! (e.g., `typeloom-codegen-csharp`) contribute tables and syntax strategies;
//! everything that turns descriptors into declaration strings lives here.
//!
//! # Module Organization
//!
//! - [`tables`] - Immutable mapping tables and their builder
//! - [`resolver`] - Descriptor resolution and enum literal rendering
//! - [`language`] - Target strategies (DeclarationSyntax, EnumLiteralSyntax, Target, etc.)
//! - [`generation`] - Target registry and the generation driver
//! - [`testing`] - Fixture target (feature-gated)

pub mod generation;
pub mod language;
pub mod resolver;
pub mod tables;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generation::{GenerationDriver, TargetRegistry};
pub use resolver::{ResolveError, TypeResolver};
pub use tables::{TableError, TypeTables, TypeTablesBuilder};
