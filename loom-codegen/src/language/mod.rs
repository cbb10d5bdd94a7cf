//! Target-specific strategies.
//!
//! A target plugs into the generic machinery through a handful of narrow
//! interfaces:
//! - [`Target`] - Metadata, tables and strategies for one target variant
//! - [`DeclarationSyntax`] - Generic type declaration syntax
//! - [`EnumLiteralSyntax`] - String literal escaping for enum members
//! - [`NamingConvention`] - Identifier rules for generated members

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{
    DeclarationSyntax, EnumLiteralSyntax, SupportingFile, Target, TargetOption, TargetTag,
};
