//! Bedrock Runtime client for text-to-image generation.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::{debug, info};

use crate::core::models::{JSON_CONTENT_TYPE, PNG_CONTENT_TYPE, TextToImageRequest};
use crate::errors::ImageGenError;

/// Produces PNG bytes from a text prompt.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        model_id: &str,
        request: &TextToImageRequest,
    ) -> Result<Vec<u8>, ImageGenError>;
}

pub struct BedrockImageGenerator {
    client: Client,
}

impl BedrockImageGenerator {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageGenerator for BedrockImageGenerator {
    async fn generate(
        &self,
        model_id: &str,
        request: &TextToImageRequest,
    ) -> Result<Vec<u8>, ImageGenError> {
        let body = request.to_bytes()?;
        debug!(model_id = %model_id, request_bytes = body.len(), "Invoking Bedrock model");

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(PNG_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                ImageGenError::UpstreamServiceError(format!(
                    "Bedrock InvokeModel failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let image = output.body.into_inner();
        if image.is_empty() {
            return Err(ImageGenError::UpstreamServiceError(
                "Bedrock returned an empty image".to_string(),
            ));
        }

        info!(model_id = %model_id, image_bytes = image.len(), "Image generated");
        Ok(image)
    }
}
