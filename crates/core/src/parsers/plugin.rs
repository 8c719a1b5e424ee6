use thiserror::Error;

use crate::model::VariableSnapshot;

#[derive(Debug, Error)]
pub enum PluginParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Plugin-runtime export: `collections` and `variables` arrays exactly as
/// the plugin API hands them out, already in host iteration order.
pub fn parse_plugin_export(data: &[u8]) -> Result<VariableSnapshot, PluginParseError> {
    Ok(serde_json::from_slice(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariableValue;

    #[test]
    fn parse_plugin_shape() {
        let json = r#"{
            "collections": [
                {"id": "c1", "name": "primitives",
                 "modes": [{"modeId": "m1", "name": "Mode 1"}],
                 "defaultModeId": "m1", "variableIds": ["v1", "v2"]}
            ],
            "variables": [
                {"id": "v1", "name": "spacing-sm", "variableCollectionId": "c1",
                 "resolvedType": "FLOAT", "scopes": ["GAP"], "valuesByMode": {"m1": 8}},
                {"id": "v2", "name": "font-body", "variableCollectionId": "c1",
                 "resolvedType": "STRING", "scopes": ["FONT_FAMILY"],
                 "valuesByMode": {"m1": "Inter"}}
            ]
        }"#;

        let snapshot = parse_plugin_export(json.as_bytes()).unwrap();
        assert_eq!(snapshot.collection_count(), 1);
        assert_eq!(snapshot.variable_count(), 2);
        assert_eq!(
            snapshot.variable("v2").and_then(|v| v.value_for_mode("m1")),
            Some(&VariableValue::Text("Inter".into()))
        );
    }

    #[test]
    fn reject_malformed_document() {
        let err = parse_plugin_export(br#"{"collections": [{"id": 7}]}"#).unwrap_err();
        assert!(matches!(err, PluginParseError::Json(_)));
    }
}
