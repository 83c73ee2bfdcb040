use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pipeline definition as returned by the orchestration service.
///
/// The body is an opaque nested structure: identity metadata (`id`, `etag`,
/// `name`, `type`) plus a `properties` object holding the ordered
/// `activities` sequence. It is an immutable snapshot once fetched; the
/// comparison subsystem normalizes it rather than mutating it in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    /// The name the definition was requested under.
    pub name: String,
    /// The definition body in its canonical wire form.
    pub body: Value,
}

impl PipelineDefinition {
    /// Create a definition from a fetched body.
    pub fn new(name: impl Into<String>, body: Value) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn construction_keeps_body_intact() {
        let body = json!({"name": "p1", "properties": {"activities": []}});
        let def = PipelineDefinition::new("p1", body.clone());
        assert_eq!(def.name, "p1");
        assert_eq!(def.body, body);
    }

    #[test]
    fn serde_round_trip() {
        let def = PipelineDefinition::new("p1", json!({"etag": "abc"}));
        let encoded = serde_json::to_string(&def).unwrap();
        let decoded: PipelineDefinition = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, def);
    }
}
