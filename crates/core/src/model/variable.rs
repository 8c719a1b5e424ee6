use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use vartok_protocol::VariableScope;

/// The host-side value type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    Boolean,
    Color,
    Float,
    String,
}

/// Host color with normalized channels (0–1). Alpha defaults to 1 for RGB
/// values that carry none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum AliasTag {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// An alias value pointing at another variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    tag: AliasTag,
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            tag: AliasTag::VariableAlias,
            id: id.into(),
        }
    }
}

/// A single mode slot of a variable.
///
/// The host stores these untyped. The wire shapes are structurally disjoint
/// (alias objects carry a VARIABLE_ALIAS tag, colors carry channels), so an
/// untagged union recovers the exact variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Color(RawColor),
    Number(f64),
    Text(String),
    Bool(bool),
}

impl VariableValue {
    pub fn as_alias(&self) -> Option<&VariableAlias> {
        match self {
            Self::Alias(alias) => Some(alias),
            _ => None,
        }
    }
}

/// A scoped variable with one value slot per mode of its collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub id: String,
    pub name: String,
    #[serde(rename = "variableCollectionId")]
    pub variable_collection_id: String,
    #[serde(rename = "resolvedType")]
    pub resolved_type: ResolvedType,
    #[serde(default)]
    pub scopes: Vec<VariableScope>,
    /// Values keyed by mode id, in host order. The host backfills a slot for
    /// every mode of the owning collection.
    #[serde(rename = "valuesByMode")]
    pub values_by_mode: IndexMap<String, VariableValue>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(rename = "hiddenFromPublishing", default)]
    pub hidden_from_publishing: bool,
}

impl Variable {
    pub fn value_for_mode(&self, mode_id: &str) -> Option<&VariableValue> {
        self.values_by_mode.get(mode_id)
    }
}
