use bon::Builder;
use serde::{Deserialize, Serialize};

/// Aspect of the generated image or video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageSize {
    Square,
    Landscape,
    Portrait,
}

/// Body of `POST /v0/image/generation`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ImageGenerationRequest {
    #[builder(into)]
    pub model: String,
    /// Prompt describing the image
    #[builder(into)]
    pub description: String,
    pub size: ImageSize,
    /// Number of images to generate
    pub variations: u32,
}

/// Body of `POST /v1/image/generation`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ImageGenerationRequestV1 {
    #[builder(into)]
    pub model: String,
    #[builder(into)]
    pub description: String,
    pub size: ImageSize,
    pub variations: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Let the server rewrite the prompt before generating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhance: Option<bool>,
    /// Instructions for the prompt rewrite, used with `enhance`
    #[builder(into)]
    #[serde(rename = "customEnhancer", skip_serializing_if = "Option::is_none")]
    pub custom_enhancer: Option<String>,
    /// Reference image for image-to-image models
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `POST /v1/image/tovideo`
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct ImageToVideoRequest {
    #[builder(into)]
    pub model: String,
    #[builder(into)]
    pub description: String,
    pub size: ImageSize,
    /// Length of the video in seconds
    pub duration: u32,
    #[builder(into)]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v0_body_contains_all_fields() {
        let request = ImageGenerationRequest::builder()
            .model("openai/dall-e-3")
            .description("cute cat")
            .size(ImageSize::Square)
            .variations(2)
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "openai/dall-e-3",
                "description": "cute cat",
                "size": "square",
                "variations": 2
            })
        );
    }

    #[test]
    fn test_v1_optional_fields() {
        let request = ImageGenerationRequestV1::builder()
            .model("fal-ai/flux/dev")
            .description("a robot")
            .size(ImageSize::Landscape)
            .variations(1)
            .enhance(true)
            .custom_enhancer("make it moody")
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "fal-ai/flux/dev",
                "description": "a robot",
                "size": "landscape",
                "variations": 1,
                "enhance": true,
                "customEnhancer": "make it moody"
            })
        );
    }

    #[test]
    fn test_image_size_display_matches_wire() {
        assert_eq!(ImageSize::Portrait.to_string(), "portrait");
        assert_eq!(
            serde_json::to_value(ImageSize::Portrait).unwrap(),
            json!("portrait")
        );
    }
}
