//! Text-to-speech.

use ai_ox_common::{Endpoint, FormBody, HttpMethod, RequestBody};
use bon::Builder;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Straico, StraicoRequestError, response::Envelope};

/// A voice offered by the speech provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Id to pass as [`SpeechRequest::voice_id`]
    pub voice_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Form body of `POST /v1/tts/create`
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SpeechRequest {
    #[builder(into)]
    pub model: String,
    #[builder(into)]
    pub text: String,
    #[builder(into)]
    pub voice_id: String,
}

impl SpeechRequest {
    #[must_use]
    pub fn to_form(&self) -> FormBody {
        FormBody::new()
            .text("model", &self.model)
            .text("text", &self.text)
            .text("voice_id", &self.voice_id)
    }
}

/// Synthesized audio, returned undecoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResponse {
    pub audio: Bytes,
    /// `Content-Type` reported by the server, `audio/mpeg` when absent
    pub content_type: String,
}

impl Straico {
    /// List the voices available to [`Straico::create_speech`].
    pub async fn list_voices(&self) -> Result<Envelope<Vec<Voice>>, StraicoRequestError> {
        let endpoint = Endpoint::new("v1/tts/elevenlabslist", HttpMethod::Get).with_json_headers();

        self.request_helper()
            .json("list_voices", &endpoint, RequestBody::Empty)
            .await
    }

    /// Synthesize `request.text` into audio.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use straico_ox::{Straico, SpeechRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Straico::load_from_env()?;
    /// let request = SpeechRequest::builder()
    ///     .model("eleven_multilingual_v2")
    ///     .text("Hello there")
    ///     .voice_id("21m00Tcm4TlvDq8ikWAM")
    ///     .build();
    /// let speech = client.create_speech(&request).await?;
    /// std::fs::write("hello.mp3", &speech.audio)?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_speech(
        &self,
        request: &SpeechRequest,
    ) -> Result<SpeechResponse, StraicoRequestError> {
        let endpoint = Endpoint::new("v1/tts/create", HttpMethod::Post);

        self.request_helper()
            .bytes("create_speech", &endpoint, request.to_form().into())
            .await
    }
}
