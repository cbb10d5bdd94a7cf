//! Core operations.
//!
//! This module contains the business logic for loom commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod info;
pub mod targets;

pub use check::check;
pub use info::info;
pub use targets::targets;
