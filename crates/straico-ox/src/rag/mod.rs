//! RAG knowledge bases built from uploaded documents.

pub mod request;
pub mod response;

pub use request::{
    BreakpointThresholdType, ChunkingMethod, CreateRagRequest, RagPromptRequest, SearchType,
};
pub use response::{Rag, RagCompletionResponse, RagReference};

use ai_ox_common::{Endpoint, FilePart, HttpMethod, MultipartBody, RequestBody};

use crate::{
    Straico, StraicoRequestError,
    response::{DeleteResponse, Envelope},
};

const RAG_URL: &str = "v0/rag";

impl Straico {
    /// Create a RAG from one or more documents.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use straico_ox::{Straico, CreateRagRequest, FilePart};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Straico::load_from_env()?;
    /// let request = CreateRagRequest::builder()
    ///     .name("Handbook")
    ///     .description("Employee handbook")
    ///     .files(vec![FilePart::from_path("handbook.pdf").await?])
    ///     .build();
    /// let rag = client.create_rag(request).await?.into_data();
    /// println!("created {}", rag.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_rag(
        &self,
        request: CreateRagRequest,
    ) -> Result<Envelope<Rag>, StraicoRequestError> {
        let endpoint = Endpoint::new(RAG_URL, HttpMethod::Post);

        self.request_helper()
            .json("create_rag", &endpoint, request.into_multipart().into())
            .await
    }

    /// Add documents to an existing RAG.
    pub async fn update_rag(
        &self,
        rag_id: &str,
        files: Vec<FilePart>,
    ) -> Result<Envelope<Rag>, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{RAG_URL}/{rag_id}"), HttpMethod::Put);
        let body = MultipartBody::new().files("files", files);

        self.request_helper()
            .json("update_rag", &endpoint, body.into())
            .await
    }

    pub async fn delete_rag(&self, rag_id: &str) -> Result<DeleteResponse, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{RAG_URL}/{rag_id}"), HttpMethod::Delete);

        self.request_helper()
            .json("delete_rag", &endpoint, RequestBody::Empty)
            .await
    }

    /// Answer a prompt from the content of a RAG.
    pub async fn rag_prompt_completion(
        &self,
        rag_id: &str,
        request: &RagPromptRequest,
    ) -> Result<Envelope<RagCompletionResponse>, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{RAG_URL}/{rag_id}/prompt"), HttpMethod::Post);

        self.request_helper()
            .json("rag_prompt_completion", &endpoint, request.to_form().into())
            .await
    }
}
