use ai_ox_common::CommonRequestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Prefix used by most operations when the server answers with a failure status.
pub const NETWORK_NOT_OK: &str = "Network response was not ok";

/// Prefix used by [`crate::Straico::list_models`] on failure status.
pub const FETCHING_MODELS: &str = "Error fetching models";

/// Errors that can occur when making requests to the Straico API
#[derive(Debug, Error)]
pub enum StraicoRequestError {
    /// The call never completed: DNS, connection reset, timeout or abort.
    /// This is the transport's error, untouched.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// The success body was not the JSON the operation expects
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    /// The server answered with a non-success status
    #[error("{context}: {status_text}")]
    Status {
        context: &'static str,
        status: StatusCode,
        status_text: String,
        body: String,
    },

    /// The credential could not be placed into a header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Reading a local file failed
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl StraicoRequestError {
    /// Status code of a failed response, if the failure was a status failure.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a transport-layer error, wording status failures with `context`.
    pub(crate) fn from_common(err: CommonRequestError, context: &'static str) -> Self {
        match err {
            CommonRequestError::Http(e) => Self::ReqwestError(e),
            CommonRequestError::Json(e) => Self::SerdeError(e),
            CommonRequestError::Status {
                status,
                status_text,
                body,
            } => Self::Status {
                context,
                status,
                status_text,
                body,
            },
            CommonRequestError::InvalidHeader(name) => Self::InvalidHeader(name),
            CommonRequestError::Io(e) => Self::IoError(e),
        }
    }
}

impl From<CommonRequestError> for StraicoRequestError {
    fn from(err: CommonRequestError) -> Self {
        Self::from_common(err, NETWORK_NOT_OK)
    }
}
