//! Deserializable representation of a capability catalog file.

use crate::capability::Capability;
use crate::registry::IntentRegistry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Full capability catalog as stored on disk.
pub struct CapabilityCatalog {
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capabilities: Vec<Capability>,
}

impl CapabilityCatalog {
    pub fn new(schema_version: impl Into<String>, capabilities: Vec<Capability>) -> Self {
        Self {
            schema_version: schema_version.into(),
            description: None,
            capabilities,
        }
    }

    /// Register every capability, preserving catalog order.
    pub fn into_registry(self) -> IntentRegistry {
        IntentRegistry::from_capabilities(self.capabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_serde_matches_file_layout() {
        let catalog: CapabilityCatalog = serde_json::from_value(json!({
            "schema_version": "intent_catalog_v1",
            "capabilities": [
                {"name": "b", "accepts_tags": ["x"], "required_params": ["p"]},
                {"name": "a"}
            ]
        }))
        .unwrap();
        assert!(catalog.description.is_none());
        assert!(catalog.capabilities[1].accepts_tags.is_empty());
        assert!(catalog.capabilities[1].required_params.is_empty());

        let value = serde_json::to_value(&catalog).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["capabilities"][0]["name"], "b");
    }

    #[test]
    fn into_registry_keeps_order() {
        let catalog = CapabilityCatalog::new(
            "intent_catalog_v1",
            vec![
                Capability::new("zeta", ["t"], ["p"]),
                Capability::new("alpha", ["t"], ["p"]),
            ],
        );
        let registry = catalog.into_registry();
        let names: Vec<&str> = registry
            .list_capabilities()
            .iter()
            .map(|cap| cap.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
