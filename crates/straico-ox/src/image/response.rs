use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coins charged for an image generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePrice {
    #[serde(default)]
    pub price_per_image: f64,
    #[serde(default)]
    pub quantity_images: u32,
    #[serde(default)]
    pub total: f64,
}

/// Coins charged for a video generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPrice {
    #[serde(default)]
    pub price_per_video: f64,
    #[serde(default)]
    pub total: f64,
}

/// Result of the legacy v0 image generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<ImagePrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of the v1 image generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationResponseV1 {
    /// Archive with every generated image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<ImagePrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of an image-to-video generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoGenerationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<VideoPrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_response() {
        let response: VideoGenerationResponse = serde_json::from_value(json!({
            "zip": "zip-url",
            "video": ["video-url"],
            "price": {"price_per_video": 1, "total": 1}
        }))
        .unwrap();

        assert_eq!(response.zip.as_deref(), Some("zip-url"));
        assert_eq!(response.video, Some(vec!["video-url".to_string()]));
        assert_eq!(
            response.price,
            Some(VideoPrice {
                price_per_video: 1.0,
                total: 1.0
            })
        );
    }

    #[test]
    fn test_v1_response_keeps_unknown_fields() {
        let response: ImageGenerationResponseV1 = serde_json::from_value(json!({
            "zip": "z",
            "images": ["a", "b"],
            "price": {"price_per_image": 20, "quantity_images": 2, "total": 40},
            "seed": 42
        }))
        .unwrap();

        assert_eq!(response.images.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(response.price.unwrap().quantity_images, 2);
        assert_eq!(response.extra["seed"], 42);
    }

    #[test]
    fn test_absent_media_lists_stay_absent() {
        let body = json!({"zip": "z"});

        let image: ImageGenerationResponseV1 = serde_json::from_value(body.clone()).unwrap();
        assert!(image.images.is_none());
        assert_eq!(serde_json::to_value(&image).unwrap(), body);

        let video: VideoGenerationResponse = serde_json::from_value(body.clone()).unwrap();
        assert!(video.video.is_none());
        assert_eq!(serde_json::to_value(&video).unwrap(), body);
    }

    #[test]
    fn test_v1_round_trip() {
        let body = json!({
            "zip": "z",
            "images": ["a"],
            "price": {"price_per_image": 20.0, "quantity_images": 1, "total": 20.0},
            "seed": 42
        });
        let response: ImageGenerationResponseV1 = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }
}
