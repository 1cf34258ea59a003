pub mod request;
pub mod response;

pub use request::PromptCompletionRequest;
pub use response::{
    ChoiceMessage, Completion, CompletionChoice, Cost, ModelCompletion, PromptCompletionResponse,
};

use ai_ox_common::{Endpoint, HttpMethod};

use crate::{Straico, StraicoRequestError, response::Envelope};

impl Straico {
    /// Send one message to one or more models and collect every model's answer.
    pub async fn prompt_completion(
        &self,
        request: &PromptCompletionRequest,
    ) -> Result<Envelope<PromptCompletionResponse>, StraicoRequestError> {
        let endpoint = Endpoint::new("v1/prompt/completion", HttpMethod::Post);

        self.request_helper()
            .json_body("prompt_completion", &endpoint, request)
            .await
    }
}
