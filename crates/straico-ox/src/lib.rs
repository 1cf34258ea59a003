#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Straico API client for Rust
//!
//! Covers the Straico REST catalogue: models, user info, prompt completion,
//! file upload, image generation, image-to-video, agents, RAG knowledge bases
//! and text-to-speech. Every call is a single stateless request: the client
//! holds the credential and transport configuration, nothing else.
//!
//! # Example
//!
//! ```rust,no_run
//! use straico_ox::{Straico, completion::PromptCompletionRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Straico::new("your-api-key");
//!
//! let request = PromptCompletionRequest::builder()
//!     .models(vec!["openai/gpt-4o-mini".to_string()])
//!     .message("Hello!")
//!     .build();
//!
//! let response = client.prompt_completion(&request).await?;
//! println!("{:?}", response.data.text("openai/gpt-4o-mini"));
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod completion;
pub mod error;
pub mod files;
pub mod image;
mod internal;
pub mod models;
pub mod rag;
pub mod response;
pub mod tts;
pub mod user;

// Re-export main types
pub use agent::{Agent, AgentPromptRequest, CreateAgentRequest, UpdateAgentRequest};
pub use completion::{PromptCompletionRequest, PromptCompletionResponse};
pub use error::StraicoRequestError;
pub use files::FileUploadResponse;
pub use image::{
    ImageGenerationRequest, ImageGenerationRequestV1, ImageGenerationResponse,
    ImageGenerationResponseV1, ImageToVideoRequest, VideoGenerationResponse,
};
pub use models::Model;
pub use rag::{CreateRagRequest, Rag, RagCompletionResponse, RagPromptRequest, SearchType};
pub use response::{DeleteResponse, Envelope};
pub use tts::{SpeechRequest, SpeechResponse, Voice};
pub use user::UserInfo;

// Re-export the file handle from ai-ox-common for convenience
pub use ai_ox_common::FilePart;

use bon::Builder;
use core::fmt;

use crate::internal::StraicoRequestHelper;

const BASE_URL: &str = "https://api.straico.com";
/// Host serving the agent/RAG association endpoint
const RAG_BASE_URL: &str = "https://stapi.straico.com";

#[derive(Clone, Builder)]
pub struct Straico {
    #[builder(into)]
    pub(crate) api_key: String,
    #[builder(default)]
    pub(crate) client: reqwest::Client,
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    #[builder(default = RAG_BASE_URL.to_string(), into)]
    pub(crate) rag_base_url: String,
}

impl Straico {
    /// Create a new Straico client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            rag_base_url: RAG_BASE_URL.to_string(),
        }
    }

    /// Create a client from the `STRAICO_API_KEY` environment variable.
    pub fn load_from_env() -> Result<Self, std::env::VarError> {
        let api_key = std::env::var("STRAICO_API_KEY")?;
        Ok(Self::builder().api_key(api_key).build())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn rag_base_url(&self) -> &str {
        &self.rag_base_url
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> StraicoRequestHelper {
        StraicoRequestHelper::new(self.client.clone(), &self.base_url, &self.api_key)
    }
}

impl fmt::Debug for Straico {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Straico")
            .field("api_key", &"[REDACTED]")
            .field("client", &self.client)
            .field("base_url", &self.base_url)
            .field("rag_base_url", &self.rag_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Straico::new("test-key");
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url(), "https://api.straico.com");
        assert_eq!(client.rag_base_url(), "https://stapi.straico.com");
    }

    #[test]
    fn test_client_builder() {
        let client = Straico::builder()
            .api_key("test-key")
            .base_url("http://localhost:8080")
            .rag_base_url("http://localhost:8081")
            .build();

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.rag_base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_builder_defaults() {
        let client = Straico::builder().api_key("k").build();
        assert_eq!(client.base_url(), BASE_URL);
        assert_eq!(client.rag_base_url(), RAG_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = Straico::new("sk-very-secret");
        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-very-secret"));
    }
}
