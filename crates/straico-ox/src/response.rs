use serde::{Deserialize, Serialize};

/// The `{ data, success }` wrapper most Straico endpoints answer with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub success: bool,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Confirmation message carried in `data` by some delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}

/// Response of the delete endpoints.
///
/// The server has been seen answering both `{ success, message }` and
/// `{ success, data: { message } }`; either shape decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DeleteMessage>,
}

impl DeleteResponse {
    /// Confirmation text, wherever the server put it.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or_else(|| self.data.as_ref().map(|d| d.message.as_str()))
    }
}
