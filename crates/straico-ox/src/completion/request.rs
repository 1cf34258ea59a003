use bon::Builder;
use serde::Serialize;

/// Body of `POST /v1/prompt/completion`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct PromptCompletionRequest {
    /// Model identifiers to query, e.g. `openai/gpt-4o-mini`
    pub models: Vec<String>,
    #[builder(into)]
    pub message: String,
    /// URLs of previously uploaded files to ground the answer on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_urls: Option<Vec<String>>,
    /// Image URLs for vision-capable models
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Return the extracted file/video transcripts alongside the completions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_transcripts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}
