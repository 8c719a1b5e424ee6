//! Aggregation of per-variable records into the base, theme, and merged
//! documents.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use vartok_protocol::{MergedEntry, MergedTokens, ThemeTokens, TokenMap};

use crate::model::{VariableCollection, VariableSnapshot};
use crate::resolve;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document serialization: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One collection's contribution to the export.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionTokens {
    /// Single-mode collection: variable name → record, no mode wrapper.
    Flat(TokenMap),
    /// Multi-mode collection: mode name → variable map.
    ByMode(IndexMap<String, TokenMap>),
}

/// Map every variable of one collection, mode by mode.
pub fn collection_tokens(
    snapshot: &VariableSnapshot,
    collection: &VariableCollection,
) -> CollectionTokens {
    let members = snapshot.variables_in(&collection.id);

    if let [mode] = collection.modes.as_slice() {
        let mut tokens = TokenMap::new();
        for variable in &members {
            tokens.insert(
                variable.name.clone(),
                resolve::map_variable(snapshot, variable, &mode.mode_id),
            );
        }
        return CollectionTokens::Flat(tokens);
    }

    let mut by_mode = IndexMap::new();
    for mode in &collection.modes {
        let mut tokens = TokenMap::new();
        for variable in &members {
            tokens.insert(
                variable.name.clone(),
                resolve::map_variable(snapshot, variable, &mode.mode_id),
            );
        }
        by_mode.insert(mode.name.clone(), tokens);
    }
    CollectionTokens::ByMode(by_mode)
}

/// The three documents one run produces.
#[derive(Debug, Clone, Default)]
pub struct TokenExport {
    /// Flattened single-mode collections, keyed by variable name.
    pub base: TokenMap,
    /// Multi-mode collections, keyed by mode name.
    pub theme: ThemeTokens,
    /// Everything, in collection order. Single-mode collections contribute
    /// variable names, multi-mode collections contribute mode names, so the
    /// key spaces mix here.
    pub merged: MergedTokens,
}

/// Run the whole snapshot through the pipeline, collection by collection.
/// Later collections win key collisions but keep the first insertion's
/// position.
pub fn export_tokens(snapshot: &VariableSnapshot) -> TokenExport {
    let mut export = TokenExport::default();

    for collection in &snapshot.collections {
        match collection_tokens(snapshot, collection) {
            CollectionTokens::Flat(tokens) => {
                for (name, record) in tokens {
                    export
                        .merged
                        .insert(name.clone(), MergedEntry::Record(record.clone()));
                    export.base.insert(name, record);
                }
            }
            CollectionTokens::ByMode(modes) => {
                for (mode_name, tokens) in modes {
                    export
                        .merged
                        .insert(mode_name.clone(), MergedEntry::Modes(tokens.clone()));
                    export.theme.insert(mode_name, tokens);
                }
            }
        }
    }

    export
}

/// Pretty-print a document with the four-space indent the download surface
/// expects.
pub fn to_document_json<T: Serialize>(value: &T) -> Result<String, ExportError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
