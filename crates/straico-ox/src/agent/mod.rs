//! Agents: server-side personas (prompt + default model + optional RAG).

pub mod request;
pub mod response;

pub use request::{AgentPromptRequest, CreateAgentRequest, UpdateAgentRequest};
pub use response::Agent;

use ai_ox_common::{Endpoint, HttpMethod, RequestBody};
use serde::Serialize;

use crate::{
    Straico, StraicoRequestError,
    rag::RagCompletionResponse,
    response::{DeleteResponse, Envelope},
};

const AGENT_URL: &str = "v0/agent";

/// JSON body associating a RAG with an agent
#[derive(Debug, Serialize)]
struct AddRagBody<'a> {
    rag: &'a str,
}

impl Straico {
    /// Create an agent.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use straico_ox::{Straico, CreateAgentRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Straico::load_from_env()?;
    /// let request = CreateAgentRequest::builder()
    ///     .name("Support")
    ///     .custom_prompt("Answer politely.")
    ///     .default_llm("openai/gpt-4o-mini")
    ///     .tags(vec!["support".to_string()])
    ///     .build();
    /// let agent = client.create_agent(&request).await?.into_data();
    /// println!("created {}", agent.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_agent(
        &self,
        request: &CreateAgentRequest,
    ) -> Result<Envelope<Agent>, StraicoRequestError> {
        let endpoint = Endpoint::new(AGENT_URL, HttpMethod::Post);

        self.request_helper()
            .json("create_agent", &endpoint, request.to_form().into())
            .await
    }

    /// List every agent of the account.
    pub async fn list_agents(&self) -> Result<Envelope<Vec<Agent>>, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{AGENT_URL}/"), HttpMethod::Get).with_json_headers();

        self.request_helper()
            .json("list_agents", &endpoint, RequestBody::Empty)
            .await
    }

    pub async fn agent_details(&self, agent_id: &str) -> Result<Envelope<Agent>, StraicoRequestError> {
        let endpoint =
            Endpoint::new(format!("{AGENT_URL}/{agent_id}"), HttpMethod::Get).with_json_headers();

        self.request_helper()
            .json("agent_details", &endpoint, RequestBody::Empty)
            .await
    }

    /// Update the fields set in `request`; unset fields are left untouched.
    pub async fn update_agent(
        &self,
        agent_id: &str,
        request: &UpdateAgentRequest,
    ) -> Result<Envelope<Agent>, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{AGENT_URL}/{agent_id}"), HttpMethod::Put);

        self.request_helper()
            .json("update_agent", &endpoint, request.to_form().into())
            .await
    }

    pub async fn delete_agent(&self, agent_id: &str) -> Result<DeleteResponse, StraicoRequestError> {
        let endpoint =
            Endpoint::new(format!("{AGENT_URL}/{agent_id}"), HttpMethod::Delete).with_json_headers();

        self.request_helper()
            .json("delete_agent", &endpoint, RequestBody::Empty)
            .await
    }

    /// Attach a RAG knowledge base to an agent.
    ///
    /// This endpoint lives on a separate host, see [`Straico::rag_base_url`].
    pub async fn add_rag_to_agent(
        &self,
        agent_id: &str,
        rag_id: &str,
    ) -> Result<Envelope<Agent>, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{AGENT_URL}/{agent_id}/rag"), HttpMethod::Post)
            .with_base_url(&self.rag_base_url);

        self.request_helper()
            .json_body("add_rag_to_agent", &endpoint, &AddRagBody { rag: rag_id })
            .await
    }

    /// Ask an agent a question; it answers from its associated RAG.
    pub async fn agent_prompt_completion(
        &self,
        agent_id: &str,
        request: &AgentPromptRequest,
    ) -> Result<Envelope<RagCompletionResponse>, StraicoRequestError> {
        let endpoint = Endpoint::new(format!("{AGENT_URL}/{agent_id}/prompt"), HttpMethod::Post);

        self.request_helper()
            .json("agent_prompt_completion", &endpoint, request.to_form().into())
            .await
    }
}
