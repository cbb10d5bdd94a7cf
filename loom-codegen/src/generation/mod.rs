//! Target discovery and model rendering.
//!
//! - [`TargetRegistry`] - Registers targets and instantiates their resolvers
//! - [`GenerationDriver`] - Renders a host's models and enums through a resolver
//! - [`GenerationInput`] / [`GenerationOutput`] - Serializable driver input and output

mod driver;
mod model;
mod registry;

pub use driver::{DriverError, GenerationDriver};
pub use model::{
    EnumInput, FieldInput, GenerationInput, GenerationOutput, ModelInput, RenderedEnum,
    RenderedField, RenderedMember, RenderedModel,
};
pub use registry::{RegistryError, TargetRegistry};
