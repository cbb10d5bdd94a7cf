//! Table-override files for typeloom.
//!
//! A `typeloom.toml` file adjusts the tables of a built-in target without
//! recompiling it:
//!
//! ```toml
//! [target]
//! extends = "csharp-activity"
//!
//! [types]
//! BigDecimal = "System.Double?"
//!
//! [instantiation]
//! array = "System.Collections.ObjectModel.Collection"
//!
//! [scalars]
//! "System.Half" = "float"
//! ```
//!
//! Parsing only checks the file itself. Whether the overlaid tables are
//! consistent is decided when they are built.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_FILENAME, TablesFile, TargetSection};
