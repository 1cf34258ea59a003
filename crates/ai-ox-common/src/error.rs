use reqwest::StatusCode;
use thiserror::Error;

/// Common errors that can occur in provider HTTP requests
#[derive(Error, Debug)]
pub enum CommonRequestError {
    /// The request could not complete (DNS, connection reset, timeout, abort)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The success body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status
    #[error("HTTP {}: {status_text}", status.as_u16())]
    Status {
        status: StatusCode,
        status_text: String,
        body: String,
    },

    /// A header value could not be built from the supplied input
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Human readable text for a status code.
///
/// Falls back to the numeric code when the status has no canonical reason phrase.
#[must_use]
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), ToString::to_string)
}

/// Build a [`CommonRequestError::Status`] from a failed response's status and body.
pub fn status_error(status: StatusCode, body: &[u8]) -> CommonRequestError {
    CommonRequestError::Status {
        status,
        status_text: status_text(status),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
