use serde::{Deserialize, Serialize};

/// One mode of a collection (e.g. "Light", "Dark", or the implicit
/// "Mode 1" of single-mode collections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableMode {
    #[serde(rename = "modeId")]
    pub mode_id: String,
    pub name: String,
}

/// A named group of variables sharing a mode axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    /// Modes in host order. The host guarantees at least one.
    pub modes: Vec<VariableMode>,
    #[serde(rename = "defaultModeId", default, skip_serializing_if = "Option::is_none")]
    pub default_mode_id: Option<String>,
    /// Member variable ids in host order.
    #[serde(rename = "variableIds", default)]
    pub variable_ids: Vec<String>,
    #[serde(default)]
    pub remote: bool,
    #[serde(rename = "hiddenFromPublishing", default)]
    pub hidden_from_publishing: bool,
}

impl VariableCollection {
    /// Single-mode collections flatten into the base document; everything
    /// else contributes mode-keyed trees to the theme document.
    pub fn is_single_mode(&self) -> bool {
        self.modes.len() == 1
    }

    pub fn mode(&self, mode_id: &str) -> Option<&VariableMode> {
        self.modes.iter().find(|m| m.mode_id == mode_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_collection() {
        let json = r#"{
            "id": "VariableCollectionId:1:2",
            "name": "primitives",
            "modes": [{"modeId": "1:0", "name": "Mode 1"}],
            "defaultModeId": "1:0",
            "variableIds": ["VariableID:1:3"],
            "remote": false,
            "hiddenFromPublishing": false
        }"#;

        let collection: VariableCollection = serde_json::from_str(json).unwrap();
        assert!(collection.is_single_mode());
        assert_eq!(collection.mode("1:0").map(|m| m.name.as_str()), Some("Mode 1"));
        assert!(collection.mode("9:9").is_none());
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "id": "c1",
            "name": "themes",
            "modes": [
                {"modeId": "m1", "name": "Light"},
                {"modeId": "m2", "name": "Dark"}
            ]
        }"#;

        let collection: VariableCollection = serde_json::from_str(json).unwrap();
        assert!(!collection.is_single_mode());
        assert!(collection.default_mode_id.is_none());
        assert!(collection.variable_ids.is_empty());
        assert!(!collection.remote);
    }
}
