pub mod plugin;
pub mod rest;

use serde_json::Value;
use thiserror::Error;

use crate::model::VariableSnapshot;

#[derive(Debug, Error)]
pub enum SnapshotParseError {
    #[error("plugin export: {0}")]
    Plugin(#[from] plugin::PluginParseError),
    #[error("rest export: {0}")]
    Rest(#[from] rest::RestParseError),
    #[error("unable to detect snapshot format")]
    UnknownFormat,
}

/// Auto-detect the snapshot document shape and parse it.
///
/// Detection strategy:
/// 1. Plugin export: top-level "collections" and "variables" arrays.
/// 2. REST export: a "meta" object carrying "variableCollections", the bare
///    meta object itself, or a status/error response wrapper.
pub fn parse_auto(data: &[u8]) -> Result<VariableSnapshot, SnapshotParseError> {
    if let Ok(value) = serde_json::from_slice::<Value>(data)
        && let Some(obj) = value.as_object()
    {
        if obj.get("collections").is_some_and(Value::is_array)
            && obj.get("variables").is_some_and(Value::is_array)
        {
            return Ok(plugin::parse_plugin_export(data)?);
        }

        if obj
            .get("meta")
            .and_then(|m| m.get("variableCollections"))
            .is_some()
            || obj.contains_key("variableCollections")
            || (obj.contains_key("status") && obj.contains_key("error"))
        {
            return Ok(rest::parse_rest_export(data)?);
        }
    }

    Err(SnapshotParseError::UnknownFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_plugin_export() {
        let json = r#"{"collections": [], "variables": []}"#;
        let snapshot = parse_auto(json.as_bytes()).unwrap();
        assert_eq!(snapshot.collection_count(), 0);
    }

    #[test]
    fn detects_rest_export() {
        let json = r#"{
            "status": 200, "error": false,
            "meta": {"variableCollections": {}, "variables": {}}
        }"#;
        let snapshot = parse_auto(json.as_bytes()).unwrap();
        assert_eq!(snapshot.variable_count(), 0);
    }

    #[test]
    fn detects_bare_meta() {
        let json = r#"{"variableCollections": {}, "variables": {}}"#;
        assert!(parse_auto(json.as_bytes()).is_ok());
    }

    #[test]
    fn rest_error_response_surfaces() {
        let err = parse_auto(br#"{"status": 404, "error": true}"#).unwrap_err();
        assert!(matches!(
            err,
            SnapshotParseError::Rest(rest::RestParseError::ErrorResponse(404))
        ));
    }

    #[test]
    fn unknown_format() {
        assert!(matches!(
            parse_auto(b"not json at all"),
            Err(SnapshotParseError::UnknownFormat)
        ));
        assert!(matches!(
            parse_auto(br#"{"traceEvents": []}"#),
            Err(SnapshotParseError::UnknownFormat)
        ));
        assert!(matches!(
            parse_auto(b"[1, 2, 3]"),
            Err(SnapshotParseError::UnknownFormat)
        ));
    }
}
