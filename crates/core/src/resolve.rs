//! Value resolution: alias dereferencing and the per-variable record
//! pipeline (color scaling, font-weight mapping, classification).

use vartok_protocol::{CoarseType, TokenColor, TokenRecord, TokenValue};

use crate::classify;
use crate::model::{ResolvedType, Variable, VariableSnapshot, VariableValue};

/// Alias chains are followed at most this many hops before the resolver
/// gives up and emits a symbolic reference.
pub const MAX_ALIAS_HOPS: usize = 8;

/// Outcome of resolving one variable under one mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A concrete value, possibly reached through alias hops.
    Value(TokenValue),
    /// A symbolic `"{name.value}"` string for downstream tooling to resolve
    /// by name. Skips the color and font-weight passes.
    Reference(String),
    /// Nothing to export; the record's value field is omitted.
    Missing,
}

/// The `"{name.value}"` form downstream token tooling resolves by name.
pub fn symbolic_reference(name: &str) -> String {
    format!("{{{name}.value}}")
}

/// Resolve a variable's value under one mode, dereferencing alias chains.
///
/// Every hop reads the target's slot under the *same* mode id. An alias into
/// another collection (whose modes carry different ids) therefore lands on a
/// variable without that slot and falls back to a symbolic reference. A
/// dangling alias id resolves to nothing at all, and a cycle or an exhausted
/// hop budget leaves a reference to the variable the resolver declined to
/// follow.
pub fn resolve_value(
    snapshot: &VariableSnapshot,
    variable: &Variable,
    mode_id: &str,
) -> Resolution {
    let Some(mut value) = variable.value_for_mode(mode_id) else {
        return Resolution::Missing;
    };

    let mut visited = vec![variable.id.as_str()];
    let mut hops = 0;
    loop {
        let alias = match value {
            VariableValue::Alias(alias) => alias,
            VariableValue::Color(color) => {
                return Resolution::Value(TokenValue::Color(TokenColor::new(
                    color.r, color.g, color.b, color.a,
                )));
            }
            VariableValue::Number(n) => return Resolution::Value(TokenValue::Number(*n)),
            VariableValue::Text(s) => return Resolution::Value(TokenValue::Text(s.clone())),
            VariableValue::Bool(b) => return Resolution::Value(TokenValue::Bool(*b)),
        };

        if hops == MAX_ALIAS_HOPS {
            break;
        }
        hops += 1;

        let Some(target) = snapshot.variable(&alias.id) else {
            return Resolution::Missing;
        };
        if visited.contains(&target.id.as_str()) {
            return Resolution::Reference(symbolic_reference(&target.name));
        }
        let Some(next) = target.value_for_mode(mode_id) else {
            return Resolution::Reference(symbolic_reference(&target.name));
        };
        visited.push(target.id.as_str());
        value = next;
    }

    // Hop budget exhausted with the chain still aliased.
    match value.as_alias().and_then(|alias| snapshot.variable(&alias.id)) {
        Some(target) => Resolution::Reference(symbolic_reference(&target.name)),
        None => Resolution::Missing,
    }
}

/// Named weight → numeric weight. Anything else exports no value.
fn font_weight(name: &str) -> Option<f64> {
    match name {
        "Regular" => Some(400.0),
        "Medium" => Some(500.0),
        "Semi Bold" => Some(600.0),
        "Bold" => Some(700.0),
        _ => None,
    }
}

/// Build the exported record for one variable under one mode.
///
/// Pass order matters: classification, resolution, then the color pass
/// (COLOR-typed variables force the coarse category and scale channels to
/// 0–255), then the font-weight pass. Symbolic references skip both value
/// passes and keep the category the scopes alone produce.
pub fn map_variable(
    snapshot: &VariableSnapshot,
    variable: &Variable,
    mode_id: &str,
) -> TokenRecord {
    let mut kind = classify::coarse_type(&variable.scopes);

    let mut value = match resolve_value(snapshot, variable, mode_id) {
        Resolution::Reference(reference) => {
            return TokenRecord {
                value: Some(TokenValue::Text(reference)),
                kind,
                token_type: classify::token_type(&variable.scopes, kind),
            };
        }
        Resolution::Value(value) => Some(value),
        Resolution::Missing => None,
    };

    if variable.resolved_type == ResolvedType::Color {
        kind = Some(CoarseType::Color);
        if let Some(TokenValue::Color(color)) = &mut value {
            color.r *= 255.0;
            color.g *= 255.0;
            color.b *= 255.0;
        }
    }

    if kind == Some(CoarseType::FontWeight) {
        value = match value {
            Some(TokenValue::Text(name)) => font_weight(&name).map(TokenValue::Number),
            _ => None,
        };
    }

    TokenRecord {
        value,
        kind,
        token_type: classify::token_type(&variable.scopes, kind),
    }
}
