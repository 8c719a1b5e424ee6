use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::tokens::ThemeTokens;

/// A message posted by the UI surface to the plugin core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiRequest {
    /// Start one export run with the given preferences.
    Run {
        #[serde(default)]
        config: ExportConfig,
    },
    /// Close the session; nothing is emitted afterwards.
    Cancel,
}

/// A message posted by the plugin core back to the UI surface.
///
/// Emission order per run is fixed: base, theme, merged. The base and merged
/// payloads are pre-serialized JSON strings (4-space indent) ready for
/// download; the theme payload crosses the wire as a structured object. The
/// asymmetry is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ExportMessage {
    BaseTokens(String),
    ThemeTokens(ThemeTokens),
    MergedTokens(String),
}
