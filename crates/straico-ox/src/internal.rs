use ai_ox_common::{Endpoint, RequestBody, RequestBuilder, RequestConfig};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    StraicoRequestError,
    error::NETWORK_NOT_OK,
    tts::SpeechResponse,
};

/// Straico client helper methods using the common `RequestBuilder`
#[derive(Debug)]
pub(crate) struct StraicoRequestHelper {
    request_builder: RequestBuilder,
}

impl StraicoRequestHelper {
    pub(crate) fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        let config = RequestConfig::new(base_url, api_key);
        Self {
            request_builder: RequestBuilder::new(client, config),
        }
    }

    /// Issue a call whose success body is a JSON document.
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> Result<T, StraicoRequestError> {
        self.json_with_context(operation, endpoint, body, NETWORK_NOT_OK)
            .await
    }

    /// Encode `body` as JSON and issue the call.
    pub(crate) async fn json_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T, StraicoRequestError> {
        let body = RequestBody::json(body)
            .map_err(StraicoRequestError::from)
            .inspect_err(|e| log_failure(operation, e))?;
        self.json(operation, endpoint, body).await
    }

    /// Like [`Self::json`] but with a custom prefix for status failures.
    pub(crate) async fn json_with_context<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        endpoint: &Endpoint,
        body: RequestBody,
        context: &'static str,
    ) -> Result<T, StraicoRequestError> {
        self.request_builder
            .request_json(endpoint, body)
            .await
            .map_err(|e| StraicoRequestError::from_common(e, context))
            .inspect_err(|e| log_failure(operation, e))
    }

    /// Issue a call whose success body is raw bytes.
    pub(crate) async fn bytes(
        &self,
        operation: &'static str,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> Result<SpeechResponse, StraicoRequestError> {
        let (audio, content_type) = self
            .request_builder
            .request_bytes(endpoint, body)
            .await
            .map_err(StraicoRequestError::from)
            .inspect_err(|e| log_failure(operation, e))?;

        Ok(SpeechResponse {
            audio,
            content_type: content_type.unwrap_or_else(|| "audio/mpeg".to_string()),
        })
    }
}

fn log_failure(operation: &str, err: &StraicoRequestError) {
    log::error!("straico {operation} failed: {err}");
}
