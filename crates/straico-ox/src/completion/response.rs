use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Answers of a prompt completion, keyed by model identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptCompletionResponse {
    pub completions: BTreeMap<String, ModelCompletion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_price: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_words: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcripts: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One model's completion with its cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCompletion {
    pub completion: Completion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Cost>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub choices: Vec<CompletionChoice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Input/output/total triple used for both coins and word counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    #[serde(default)]
    pub input: f64,
    #[serde(default)]
    pub output: f64,
    #[serde(default)]
    pub total: f64,
}

impl PromptCompletionResponse {
    /// Text of the first choice returned by `model`, if any.
    #[must_use]
    pub fn text(&self, model: &str) -> Option<&str> {
        self.completions
            .get(model)?
            .completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }

    /// Iterate `(model, first choice text)` for every model that answered.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.completions.iter().filter_map(|(model, c)| {
            c.completion
                .choices
                .first()
                .map(|choice| (model.as_str(), choice.message.content.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "completions": {
                "test-model": {
                    "completion": {
                        "choices": [{"message": {"content": "test content"}}]
                    }
                }
            }
        })
    }

    #[test]
    fn test_text_lookup() {
        let response: PromptCompletionResponse = serde_json::from_value(fixture()).unwrap();
        assert_eq!(response.text("test-model"), Some("test content"));
        assert_eq!(response.text("other-model"), None);
        assert_eq!(
            response.texts().collect::<Vec<_>>(),
            [("test-model", "test content")]
        );
    }

    #[test]
    fn test_round_trip_is_identity() {
        let response: PromptCompletionResponse = serde_json::from_value(fixture()).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), fixture());
    }

    #[test]
    fn test_cost_fields() {
        let response: PromptCompletionResponse = serde_json::from_value(json!({
            "completions": {},
            "overall_price": {"input": 0.5, "output": 1.5, "total": 2.0},
            "overall_words": {"input": 3, "output": 7, "total": 10}
        }))
        .unwrap();

        let price = response.overall_price.unwrap();
        assert!((price.total - 2.0).abs() < f64::EPSILON);
        assert!((response.overall_words.unwrap().output - 7.0).abs() < f64::EPSILON);
    }
}
