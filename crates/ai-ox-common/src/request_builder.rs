use crate::{
    body::RequestBody,
    error::{self, CommonRequestError},
    headers::{self, ContentType},
};
use reqwest::{Method, RequestBuilder as ReqwestRequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP method for API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Represents an API endpoint with its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    /// Host override for endpoints served outside the configured base URL
    pub base_url: Option<String>,
    /// Content type sent when the body does not dictate one
    pub content_type: Option<ContentType>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            base_url: None,
            content_type: None,
        }
    }

    /// Send `Content-Type: application/json` even on body-less calls.
    #[must_use]
    pub fn with_json_headers(mut self) -> Self {
        self.content_type = Some(ContentType::Json);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Absolute URL of this endpoint against `default_base`.
    #[must_use]
    pub fn url(&self, default_base: &str) -> String {
        let base = self.base_url.as_deref().unwrap_or(default_base);
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Configuration for request building
#[derive(Clone)]
pub struct RequestConfig {
    pub base_url: String,
    pub bearer_token: String,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }
}

impl std::fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

/// Generic request builder that handles common HTTP patterns
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    config: RequestConfig,
}

impl RequestBuilder {
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    /// Build a reqwest `RequestBuilder` carrying headers and body for `endpoint`.
    ///
    /// The body's own content type wins over the endpoint default; multipart
    /// bodies get no explicit content type so the transport can add its boundary.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> Result<ReqwestRequestBuilder, CommonRequestError> {
        let url = endpoint.url(&self.config.base_url);
        let content_type = match &body {
            RequestBody::Multipart(_) => None,
            other => other.content_type().or(endpoint.content_type),
        };
        let headers = headers::build_headers(&self.config.bearer_token, content_type)?;

        log::debug!(
            "[ai-ox-common::request_builder] {:?} {} body kind: {}",
            endpoint.method,
            url,
            body.kind()
        );

        let req = self
            .client
            .request(endpoint.method.into(), &url)
            .headers(headers);

        Ok(match body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.body(serde_json::to_vec(&value)?),
            RequestBody::Form(form) => req.body(form.encode()),
            RequestBody::Multipart(form) => req.multipart(form.into_form()?),
        })
    }

    /// Execute a request and decode the success body as JSON
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> Result<T, CommonRequestError> {
        let res = self.build_request(endpoint, body)?.send().await?;
        self.handle_response(res).await
    }

    /// Execute a request and return the success body as raw bytes
    pub async fn request_bytes(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
    ) -> Result<(bytes::Bytes, Option<String>), CommonRequestError> {
        let res = self.build_request(endpoint, body)?.send().await?;
        let status = res.status();

        if status.is_success() {
            let content_type = res
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|ct| ct.to_str().ok())
                .map(ToString::to_string);
            Ok((res.bytes().await?, content_type))
        } else {
            Err(failure(status, res).await)
        }
    }

    /// Handle response and parse errors
    async fn handle_response<T: DeserializeOwned>(
        &self,
        res: Response,
    ) -> Result<T, CommonRequestError> {
        let status = res.status();

        if status.is_success() {
            let bytes = res.bytes().await?;
            Ok(serde_json::from_slice::<T>(&bytes)?)
        } else {
            Err(failure(status, res).await)
        }
    }
}

/// Status error for a failed response. An unreadable body is reported as empty.
async fn failure(status: StatusCode, res: Response) -> CommonRequestError {
    let body = res.bytes().await.unwrap_or_default();
    error::status_error(status, &body)
}
