//! Live API tests
//!
//! These make real calls and spend credits. They are ignored by default;
//! run with `STRAICO_API_KEY=... cargo test -- --ignored`.

#[cfg(test)]
mod tests {
    use straico_ox::{PromptCompletionRequest, Straico};

    fn client() -> Option<Straico> {
        Straico::load_from_env().ok()
    }

    #[tokio::test]
    #[ignore = "requires STRAICO_API_KEY and makes live API calls"]
    async fn test_list_models() {
        let Some(client) = client() else {
            return;
        };

        let response = client.list_models().await.unwrap();
        assert!(response.success);
        assert!(!response.data.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires STRAICO_API_KEY and makes live API calls"]
    async fn test_user_info() {
        let Some(client) = client() else {
            return;
        };

        let response = client.user_info().await.unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    #[ignore = "requires STRAICO_API_KEY and makes live API calls"]
    async fn test_prompt_completion() {
        let Some(client) = client() else {
            return;
        };

        let request = PromptCompletionRequest::builder()
            .models(vec!["openai/gpt-4o-mini".to_string()])
            .message("Say 'hello' in one word")
            .build();
        let response = client.prompt_completion(&request).await.unwrap();
        assert!(response.data.text("openai/gpt-4o-mini").is_some());
    }
}
