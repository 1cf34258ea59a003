use ai_ox_common::{FilePart, FormBody, MultipartBody};
use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Retrieval strategy used when answering from a RAG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchType {
    Similarity,
    Mmr,
    SimilarityScoreThreshold,
}

/// How uploaded documents are split into chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChunkingMethod {
    FixedSize,
    Recursive,
    Markdown,
    Python,
    Semantic,
}

/// Breakpoint rule of the `semantic` chunker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BreakpointThresholdType {
    Percentile,
    Interquartile,
    StandardDeviation,
    Gradient,
}

/// Multipart body of `POST /v0/rag`
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct CreateRagRequest {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: String,
    /// Documents to index, sent in order under the `files` field
    pub files: Vec<FilePart>,
    pub chunking_method: Option<ChunkingMethod>,
    pub chunk_size: Option<u32>,
    pub chunk_overlap: Option<u32>,
    /// Separator of the `fixed_size` chunker
    #[builder(into)]
    pub separator: Option<String>,
    /// Separators of the `recursive` chunker
    pub separators: Option<Vec<String>>,
    pub breakpoint_threshold_type: Option<BreakpointThresholdType>,
    /// Sentence window of the `semantic` chunker
    pub buffer_size: Option<u32>,
}

impl CreateRagRequest {
    #[must_use]
    pub fn into_multipart(self) -> MultipartBody {
        MultipartBody::new()
            .text("name", self.name)
            .text("description", self.description)
            .files("files", self.files)
            .text_opt("chunking_method", self.chunking_method.map(|m| m.to_string()))
            .number_opt("chunk_size", self.chunk_size)
            .number_opt("chunk_overlap", self.chunk_overlap)
            .text_opt("separator", self.separator)
            .json_opt("separators", self.separators)
            .text_opt(
                "breakpoint_threshold_type",
                self.breakpoint_threshold_type.map(|t| t.to_string()),
            )
            .number_opt("buffer_size", self.buffer_size)
    }
}

/// Form body of `POST /v0/rag/{id}/prompt`
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct RagPromptRequest {
    #[builder(into)]
    pub prompt: String,
    #[builder(into)]
    pub model: String,
    pub search_type: Option<SearchType>,
    pub k: Option<u32>,
    pub fetch_k: Option<u32>,
    pub lambda_mult: Option<f64>,
    pub score_threshold: Option<f64>,
}

impl RagPromptRequest {
    #[must_use]
    pub fn to_form(&self) -> FormBody {
        append_search_params(
            FormBody::new()
                .text("prompt", &self.prompt)
                .text("model", &self.model),
            self.search_type,
            self.k,
            self.fetch_k,
            self.lambda_mult,
            self.score_threshold,
        )
    }
}

/// Retrieval options shared by RAG and agent prompts.
pub(crate) fn append_search_params(
    form: FormBody,
    search_type: Option<SearchType>,
    k: Option<u32>,
    fetch_k: Option<u32>,
    lambda_mult: Option<f64>,
    score_threshold: Option<f64>,
) -> FormBody {
    form.text_opt("search_type", search_type.map(|s| s.to_string()))
        .number_opt("k", k)
        .number_opt("fetch_k", fetch_k)
        .number_opt("lambda_mult", lambda_mult)
        .number_opt("score_threshold", score_threshold)
}
