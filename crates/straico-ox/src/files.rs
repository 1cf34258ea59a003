use ai_ox_common::{Endpoint, FilePart, HttpMethod, MultipartBody};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Straico, StraicoRequestError, response::Envelope};

/// Result of uploading a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUploadResponse {
    /// Public URL of the stored file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Multipart body of an upload: a single part named `file`.
pub(crate) fn upload_body(file: FilePart) -> MultipartBody {
    MultipartBody::new().files("file", [file])
}

impl Straico {
    /// Upload a file, e.g. to reference its URL in a prompt completion.
    pub async fn upload_file(
        &self,
        file: FilePart,
    ) -> Result<Envelope<FileUploadResponse>, StraicoRequestError> {
        let endpoint = Endpoint::new("v0/file/upload", HttpMethod::Post);

        self.request_helper()
            .json("upload_file", &endpoint, upload_body(file).into())
            .await
    }
}
