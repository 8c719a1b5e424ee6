use serde::{Deserialize, Serialize};

use super::{Variable, VariableCollection};

/// An immutable snapshot of a document's variable data.
///
/// This is the read-only lookup surface the export pipeline runs against,
/// standing in for the host's variable queries. Collections and variables
/// keep host iteration order, which flows through to output key order. One
/// snapshot serves any number of export runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableSnapshot {
    pub collections: Vec<VariableCollection>,
    pub variables: Vec<Variable>,
}

impl VariableSnapshot {
    pub fn collection(&self, id: &str) -> Option<&VariableCollection> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Member variables of a collection, in snapshot order. A variable whose
    /// collection id matches nothing is simply never returned; there is no
    /// referential check.
    pub fn variables_in(&self, collection_id: &str) -> Vec<&Variable> {
        self.variables
            .iter()
            .filter(|v| v.variable_collection_id == collection_id)
            .collect()
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> VariableSnapshot {
        let json = r#"{
            "collections": [
                {"id": "c1", "name": "primitives", "modes": [{"modeId": "m1", "name": "Mode 1"}]},
                {"id": "c2", "name": "semantic", "modes": [
                    {"modeId": "m2", "name": "Light"},
                    {"modeId": "m3", "name": "Dark"}
                ]}
            ],
            "variables": [
                {"id": "v1", "name": "gray-100", "variableCollectionId": "c1",
                 "resolvedType": "COLOR", "scopes": ["ALL_FILLS"],
                 "valuesByMode": {"m1": {"r": 1, "g": 1, "b": 1, "a": 1}}},
                {"id": "v2", "name": "surface", "variableCollectionId": "c2",
                 "resolvedType": "COLOR", "scopes": ["FRAME_FILL"],
                 "valuesByMode": {
                    "m2": {"type": "VARIABLE_ALIAS", "id": "v1"},
                    "m3": {"r": 0, "g": 0, "b": 0, "a": 1}
                 }},
                {"id": "v3", "name": "orphan", "variableCollectionId": "gone",
                 "resolvedType": "FLOAT", "scopes": [],
                 "valuesByMode": {"m9": 4}}
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn lookups() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.collection_count(), 2);
        assert_eq!(snapshot.variable_count(), 3);
        assert_eq!(snapshot.collection("c2").map(|c| c.name.as_str()), Some("semantic"));
        assert_eq!(snapshot.variable("v1").map(|v| v.name.as_str()), Some("gray-100"));
        assert!(snapshot.collection("nope").is_none());
        assert!(snapshot.variable("nope").is_none());
    }

    #[test]
    fn members_keep_snapshot_order() {
        let snapshot = sample_snapshot();
        let names: Vec<_> = snapshot
            .variables_in("c1")
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["gray-100"]);
    }

    #[test]
    fn orphan_variables_belong_nowhere() {
        let snapshot = sample_snapshot();
        assert!(snapshot.variables_in("gone-too").is_empty());
        assert_eq!(snapshot.variables_in("gone").len(), 1);
    }
}
