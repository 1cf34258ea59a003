use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A model offered by Straico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Identifier of the model, when the server sends one as `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// Upstream provider of the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Fields not modelled above (pricing, limits, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    /// The identifier to pass back in requests.
    ///
    /// Prefers `id`, falling back to the `model` field newer listings use.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.extra.get("model").and_then(Value::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_with_id() {
        let body = json!({"id": "openai/gpt-4o", "name": "GPT-4o", "provider": "openai"});
        let model: Model = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(model.identifier(), Some("openai/gpt-4o"));
        assert!(model.extra.is_empty());
        assert_eq!(serde_json::to_value(&model).unwrap(), body);
    }

    #[test]
    fn test_model_with_model_field() {
        let model: Model = serde_json::from_value(json!({
            "name": "Claude",
            "model": "anthropic/claude-3-haiku",
            "word_limit": 150000,
            "pricing": {"coins": 1, "words": 100}
        }))
        .unwrap();

        assert_eq!(model.id, None);
        assert_eq!(model.identifier(), Some("anthropic/claude-3-haiku"));
        assert_eq!(model.extra["word_limit"], 150_000);
    }
}
