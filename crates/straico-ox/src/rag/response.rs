use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A RAG knowledge base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rag {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_overlap: Option<u32>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A retrieved chunk backing an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagReference {
    pub page_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of a RAG or agent prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagCompletionResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<RagReference>>,
    /// Source file names; a string or an array depending on the RAG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins_used: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rag_round_trip() {
        let body = json!({
            "_id": "rag-1",
            "name": "kb",
            "original_filename": "a.pdf, b.pdf",
            "chunking_method": "fixed_size",
            "chunk_size": 1000,
            "__v": 0
        });
        let rag: Rag = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(rag.id, "rag-1");
        assert_eq!(rag.chunk_size, Some(1000));
        assert_eq!(serde_json::to_value(&rag).unwrap(), body);
    }

    #[test]
    fn test_completion_response() {
        let response: RagCompletionResponse = serde_json::from_value(json!({
            "answer": "42",
            "references": [{"page_content": "the answer is 42", "page": 3, "source": "a.pdf"}],
            "file_name": "a.pdf",
            "coins_used": 0.6
        }))
        .unwrap();

        assert_eq!(response.answer, "42");
        let references = response.references.unwrap();
        assert_eq!(references[0].page, Some(3));
        assert_eq!(references[0].extra["source"], "a.pdf");
        assert_eq!(response.coins_used, Some(0.6));
    }

    #[test]
    fn test_completion_response_requires_answer() {
        assert!(serde_json::from_value::<RagCompletionResponse>(json!({"references": []})).is_err());
    }
}
