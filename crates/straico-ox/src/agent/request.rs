use ai_ox_common::FormBody;
use bon::Builder;

use crate::rag::{SearchType, request::append_search_params};

/// Form body of `POST /v0/agent`
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct CreateAgentRequest {
    #[builder(into)]
    pub name: String,
    /// System prompt the agent answers with
    #[builder(into)]
    pub custom_prompt: String,
    /// Model used when a prompt does not name one
    #[builder(into)]
    pub default_llm: String,
    #[builder(into)]
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateAgentRequest {
    /// Required fields first, then the optional ones that are set.
    #[must_use]
    pub fn to_form(&self) -> FormBody {
        FormBody::new()
            .text("name", &self.name)
            .text("custom_prompt", &self.custom_prompt)
            .text("default_llm", &self.default_llm)
            .text_opt("description", self.description.as_deref())
            .json_opt("tags", self.tags.clone())
    }
}

/// Form body of `PUT /v0/agent/{id}`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct UpdateAgentRequest {
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub custom_prompt: Option<String>,
    #[builder(into)]
    pub default_llm: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateAgentRequest {
    #[must_use]
    pub fn to_form(&self) -> FormBody {
        FormBody::new()
            .text_opt("name", self.name.as_deref())
            .text_opt("custom_prompt", self.custom_prompt.as_deref())
            .text_opt("default_llm", self.default_llm.as_deref())
            .text_opt("description", self.description.as_deref())
            .json_opt("tags", self.tags.clone())
    }
}

/// Form body of `POST /v0/agent/{id}/prompt`
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct AgentPromptRequest {
    #[builder(into)]
    pub prompt: String,
    pub search_type: Option<SearchType>,
    /// Number of chunks to retrieve
    pub k: Option<u32>,
    /// Candidates fetched before MMR re-ranking
    pub fetch_k: Option<u32>,
    /// MMR diversity, 0 = maximum diversity, 1 = minimum
    pub lambda_mult: Option<f64>,
    /// Minimum relevance for `similarity_score_threshold`
    pub score_threshold: Option<f64>,
}

impl AgentPromptRequest {
    #[must_use]
    pub fn to_form(&self) -> FormBody {
        append_search_params(
            FormBody::new().text("prompt", &self.prompt),
            self.search_type,
            self.k,
            self.fetch_k,
            self.lambda_mult,
            self.score_threshold,
        )
    }
}
