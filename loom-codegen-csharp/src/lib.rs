//! C# targets for typeloom.
//!
//! Two targets are provided:
//!
//! - [`ActivityTarget`] (`csharp-activity`) - fully qualified `System.*` type names
//! - [`ClientTarget`] (`csharp`) - C# keyword type names
//!
//! ```ignore
//! use typeloom_codegen::TargetRegistry;
//! use typeloom_codegen_csharp::ActivityTarget;
//!
//! let resolver = TargetRegistry::new()
//!     .with(ActivityTarget)
//!     .resolver("csharp-activity", None)?;
//!
//! assert_eq!(resolver.resolve_scalar("integer")?, "System.Int32?");
//! ```

mod naming;
mod render;
mod tables;
mod target;

pub use naming::CSHARP_NAMING;
pub use render::{CSharpDeclarations, CSharpEnumLiterals};
pub use tables::{activity_tables, client_tables};
pub use target::{ActivityTarget, ClientTarget, register_all};
