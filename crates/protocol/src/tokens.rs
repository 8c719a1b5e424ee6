use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::scope::{CoarseType, TokenType};

/// Ordered map of variable name → exported record.
///
/// Insertion order is contractual (it mirrors the host's iteration order),
/// and re-inserting an existing key keeps its original position while taking
/// the new value, the same semantics as spreading JS objects.
pub type TokenMap = IndexMap<String, TokenRecord>;

/// Mode-name-keyed token trees contributed by multi-mode collections.
pub type ThemeTokens = IndexMap<String, TokenMap>;

/// Every collection's contribution in a single tree. Keys are variable names
/// (from single-mode collections) or mode names (from multi-mode ones).
pub type MergedTokens = IndexMap<String, MergedEntry>;

/// Emit whole-valued finite floats as JSON integers, the way the host's JS
/// serializer prints them. Keeps exported documents byte-comparable with the
/// plugin's original output.
fn js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// An exported color: channels scaled to 0–255, alpha kept 0–1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenColor {
    #[serde(serialize_with = "js_number")]
    pub r: f64,
    #[serde(serialize_with = "js_number")]
    pub g: f64,
    #[serde(serialize_with = "js_number")]
    pub b: f64,
    #[serde(serialize_with = "js_number")]
    pub a: f64,
}

impl TokenColor {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A resolved token value.
///
/// Symbolic alias references (`"{name.value}"`) are plain text on the wire;
/// nothing downstream distinguishes them from ordinary strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(TokenColor),
    Number(#[serde(serialize_with = "js_number")] f64),
    Text(String),
    Bool(bool),
}

impl From<TokenColor> for TokenValue {
    fn from(color: TokenColor) -> Self {
        Self::Color(color)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One exported variable.
///
/// All fields are optional on the wire: the original emitter dropped
/// undefined fields, so a variable with no mappable value/category produces
/// a bare `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    /// Coarse category (`type` on the wire).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CoarseType>,
    /// Refined category (`tokenType` on the wire).
    #[serde(rename = "tokenType", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenType>,
}

/// One entry of the merged document: a multi-mode collection contributes a
/// whole variable map under its mode name, a single-mode collection
/// contributes one record under the variable name.
///
/// The two shapes stay distinguishable when deserializing: a record's field
/// values are never record objects, and a variable map's values never pass
/// the record's unknown-field guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MergedEntry {
    Modes(TokenMap),
    Record(TokenRecord),
}
