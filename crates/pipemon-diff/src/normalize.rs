//! Normalization: fetched definition to canonical comparable tree.
//!
//! Identity fields (`id`, `etag`, `name`, `type`) legitimately differ
//! between any two pipelines and are stripped before comparison. Exclusion
//! is shallow: the same key name nested deeper (an activity's `type`) is
//! semantically significant and survives.

use std::collections::BTreeMap;

use pipemon_types::PipelineDefinition;
use serde_json::Value;

use crate::error::{DiffError, DiffResult};

/// The canonical, exclusion-filtered form of one pipeline definition.
///
/// Two trees are comparable only if both were normalized with the same
/// exclusion set.
pub type CanonicalTree = BTreeMap<String, Value>;

/// Top-level keys expected to differ between any two pipelines.
pub const DEFAULT_EXCLUDED_KEYS: &[&str] = &["id", "etag", "name", "type"];

/// Normalize a fetched definition into a canonical tree.
///
/// The definition body must be a JSON object; anything else is reported as
/// a parse error attributed to that pipeline rather than silently treated
/// as an empty tree.
pub fn normalize(
    definition: &PipelineDefinition,
    excluded_keys: &[&str],
) -> DiffResult<CanonicalTree> {
    let Value::Object(body) = &definition.body else {
        return Err(DiffError::NotAnObject {
            pipeline: definition.name.clone(),
        });
    };

    Ok(body
        .iter()
        .filter(|(key, _)| !excluded_keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(name: &str, body: Value) -> PipelineDefinition {
        PipelineDefinition::new(name, body)
    }

    #[test]
    fn strips_top_level_identity_keys() {
        let def = definition(
            "p1",
            json!({
                "id": "/subscriptions/x/pipelines/p1",
                "etag": "0a0062d5",
                "name": "p1",
                "type": "Microsoft.DataFactory/factories/pipelines",
                "properties": {"activities": []}
            }),
        );

        let tree = normalize(&def, DEFAULT_EXCLUDED_KEYS).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.contains_key("properties"));
    }

    #[test]
    fn nested_occurrences_of_excluded_names_survive() {
        let def = definition(
            "p1",
            json!({
                "type": "factory-level",
                "properties": {
                    "activities": [{"name": "step", "type": "Copy"}]
                }
            }),
        );

        let tree = normalize(&def, DEFAULT_EXCLUDED_KEYS).unwrap();
        let activity = &tree["properties"]["activities"][0];
        assert_eq!(activity["type"], json!("Copy"));
        assert_eq!(activity["name"], json!("step"));
    }

    #[test]
    fn non_object_body_names_the_pipeline() {
        let def = definition("broken", json!(["not", "an", "object"]));
        let err = normalize(&def, DEFAULT_EXCLUDED_KEYS).unwrap_err();
        assert!(matches!(err, DiffError::NotAnObject { ref pipeline } if pipeline == "broken"));
    }

    #[test]
    fn empty_exclusion_set_keeps_everything() {
        let def = definition("p1", json!({"id": "x", "name": "p1"}));
        let tree = normalize(&def, &[]).unwrap();
        assert_eq!(tree.len(), 2);
    }
}
