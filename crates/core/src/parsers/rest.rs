use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Variable, VariableCollection, VariableSnapshot};

#[derive(Debug, Error)]
pub enum RestParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response flagged as error (status {0})")]
    ErrorResponse(u16),
}

/// HTTP API response wrapper for the published-variables endpoint.
#[derive(Debug, Deserialize)]
struct RestEnvelope {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    meta: Option<RestMeta>,
}

#[derive(Debug, Deserialize)]
struct RestMeta {
    #[serde(rename = "variableCollections")]
    variable_collections: IndexMap<String, VariableCollection>,
    variables: IndexMap<String, Variable>,
}

/// REST export: either the full `{status, error, meta}` response or a bare
/// `meta` object saved on its own. Entities are keyed by id, so member order
/// is recovered from each collection's `variableIds`.
pub fn parse_rest_export(data: &[u8]) -> Result<VariableSnapshot, RestParseError> {
    let envelope: RestEnvelope = serde_json::from_slice(data)?;
    if envelope.error {
        return Err(RestParseError::ErrorResponse(envelope.status.unwrap_or(0)));
    }
    let meta = match envelope.meta {
        Some(meta) => meta,
        None => serde_json::from_slice(data)?,
    };
    Ok(normalize(meta))
}

fn normalize(meta: RestMeta) -> VariableSnapshot {
    let RestMeta {
        variable_collections,
        mut variables,
    } = meta;
    let collections: Vec<VariableCollection> = variable_collections.into_values().collect();

    // Flatten in collection order, then variableIds order within each
    // collection. shift_remove keeps the residue in document order.
    let mut ordered = Vec::with_capacity(variables.len());
    for collection in &collections {
        for id in &collection.variable_ids {
            if let Some(variable) = variables.shift_remove(id) {
                ordered.push(variable);
            }
        }
    }
    // Variables no collection references trail in document order.
    ordered.extend(variables.into_values());

    VariableSnapshot {
        collections,
        variables: ordered,
    }
}
