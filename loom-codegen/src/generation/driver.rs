//! Generation driver.

use indexmap::IndexSet;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use super::model::{
    EnumInput, GenerationInput, GenerationOutput, ModelInput, RenderedEnum, RenderedField,
    RenderedMember, RenderedModel,
};
use crate::{
    language::NamingConvention,
    resolver::{ResolveError, TypeResolver},
};

/// Error returned while rendering a [`GenerationInput`].
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("field '{field}' of model '{model}'")]
    Field {
        model: String,
        field: String,
        #[source]
        source: ResolveError,
    },

    #[error("enum '{name}'")]
    Enum {
        name: String,
        #[source]
        source: ResolveError,
    },

    #[error("enum '{name}' has an invalid value: {value}")]
    InvalidEnumValue { name: String, value: Value },
}

/// Renders models and enums through one resolver.
///
/// The driver is the host's per-run loop: it holds nothing but borrowed
/// strategies, so several drivers can share one resolver.
pub struct GenerationDriver<'a> {
    resolver: &'a TypeResolver,
    naming: NamingConvention,
}

impl<'a> GenerationDriver<'a> {
    pub fn new(resolver: &'a TypeResolver, naming: NamingConvention) -> Self {
        Self { resolver, naming }
    }

    /// Render every model and enum in `input`.
    pub fn run(&self, input: &GenerationInput) -> Result<GenerationOutput, DriverError> {
        let models = input
            .models
            .iter()
            .map(|model| self.render_model(model))
            .collect::<Result<Vec<_>, _>>()?;
        let enums = input
            .enums
            .iter()
            .map(|e| self.render_enum(e))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GenerationOutput { models, enums })
    }

    pub fn render_model(&self, model: &ModelInput) -> Result<RenderedModel, DriverError> {
        trace!(model = %model.name, fields = model.fields.len(), "rendering model");

        let tables = self.resolver.tables();
        let mut imports = IndexSet::new();
        let mut fields = Vec::with_capacity(model.fields.len());

        for field in &model.fields {
            let field_error = |source| DriverError::Field {
                model: model.name.clone(),
                field: field.name.clone(),
                source,
            };

            let declaration = self.resolver.declare_type(&field.ty).map_err(field_error)?;
            let optional_declaration = self
                .resolver
                .declare_optional(&field.ty)
                .map_err(field_error)?;
            let field_imports = self.resolver.imports(&field.ty).map_err(field_error)?;
            imports.extend(field_imports.iter().cloned());

            let is_value_type = !field.ty.is_container()
                && tables.is_value_type(tables.strip_nullable(&declaration));

            fields.push(RenderedField {
                name: field.name.clone(),
                property: self.naming.property_name(&field.name),
                declaration,
                optional_declaration,
                required: field.required,
                is_value_type,
                imports: field_imports,
            });
        }

        Ok(RenderedModel {
            name: model.name.clone(),
            fields,
            imports: imports.into_iter().collect(),
        })
    }

    pub fn render_enum(&self, input: &EnumInput) -> Result<RenderedEnum, DriverError> {
        trace!(name = %input.name, kind = %input.kind, "rendering enum");

        let target = self
            .resolver
            .resolve_scalar(&input.kind)
            .map_err(|source| DriverError::Enum {
                name: input.name.clone(),
                source,
            })?;

        let integral = self
            .resolver
            .classify(target)
            .is_some_and(|kind| kind.is_enum_integral());

        let members = input
            .values
            .iter()
            .map(|value| {
                let raw = match value {
                    Value::String(s) => s.clone(),
                    // integral members print unquoted, so `1e3` or `2.0` would not compile
                    Value::Number(n) if !integral || n.is_i64() || n.is_u64() => n.to_string(),
                    other => {
                        return Err(DriverError::InvalidEnumValue {
                            name: input.name.clone(),
                            value: other.clone(),
                        });
                    }
                };
                Ok(RenderedMember {
                    name: self.naming.enum_member_name(&raw),
                    literal: self.resolver.render_enum_literal(&raw, target),
                    value: raw,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RenderedEnum {
            name: input.name.clone(),
            target: target.to_string(),
            string_like: self.resolver.is_string_like_for_enum(target),
            members,
        })
    }
}
