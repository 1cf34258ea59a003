//! Image generation (v0 and v1) and image-to-video.

pub mod request;
pub mod response;

pub use request::{ImageGenerationRequest, ImageGenerationRequestV1, ImageSize, ImageToVideoRequest};
pub use response::{
    ImageGenerationResponse, ImageGenerationResponseV1, ImagePrice, VideoGenerationResponse,
    VideoPrice,
};

use ai_ox_common::{Endpoint, HttpMethod};

use crate::{Straico, StraicoRequestError, response::Envelope};

impl Straico {
    /// Generate images through the legacy v0 endpoint.
    pub async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<Envelope<ImageGenerationResponse>, StraicoRequestError> {
        let endpoint = Endpoint::new("v0/image/generation", HttpMethod::Post);

        self.request_helper()
            .json_body("generate_image", &endpoint, request)
            .await
    }

    /// Generate images through the v1 endpoint.
    pub async fn generate_image_v1(
        &self,
        request: &ImageGenerationRequestV1,
    ) -> Result<Envelope<ImageGenerationResponseV1>, StraicoRequestError> {
        let endpoint = Endpoint::new("v1/image/generation", HttpMethod::Post);

        self.request_helper()
            .json_body("generate_image_v1", &endpoint, request)
            .await
    }

    /// Animate a still image into a short video.
    pub async fn image_to_video(
        &self,
        request: &ImageToVideoRequest,
    ) -> Result<Envelope<VideoGenerationResponse>, StraicoRequestError> {
        let endpoint = Endpoint::new("v1/image/tovideo", HttpMethod::Post);

        self.request_helper()
            .json_body("image_to_video", &endpoint, request)
            .await
    }
}
