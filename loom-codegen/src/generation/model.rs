//! Driver input and output.
//!
//! Input is what a host extracts from its schema: models with typed fields
//! and enums with raw member values. Output is everything a template needs
//! to print them.

use serde::{Deserialize, Serialize};
use typeloom_core::TypeDescriptor;

/// Models and enums to render.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationInput {
    pub models: Vec<ModelInput>,
    pub enums: Vec<EnumInput>,
}

/// A schema model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelInput {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldInput>,
}

/// A model field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldInput {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub required: bool,
}

/// A schema enum over one scalar kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnumInput {
    pub name: String,
    /// Abstract kind of the member values (e.g., "integer", "string").
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw member values, strings or numbers.
    pub values: Vec<serde_json::Value>,
}

/// Rendered models and enums, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationOutput {
    pub models: Vec<RenderedModel>,
    pub enums: Vec<RenderedEnum>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedModel {
    pub name: String,
    pub fields: Vec<RenderedField>,
    /// Non-primitive names referenced by the fields, first-seen order.
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedField {
    /// Schema name.
    pub name: String,
    /// Identifier in the target language.
    pub property: String,
    pub declaration: String,
    /// Declaration when the field may be absent.
    pub optional_declaration: String,
    pub required: bool,
    pub is_value_type: bool,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEnum {
    pub name: String,
    /// Resolved target type of the member values.
    #[serde(rename = "type")]
    pub target: String,
    /// Whether members render as quoted strings.
    pub string_like: bool,
    pub members: Vec<RenderedMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMember {
    pub name: String,
    pub value: String,
    pub literal: String,
}
