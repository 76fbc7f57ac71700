//! S3 storage for generated images: upload plus presigned retrieval.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, info};

use crate::core::models::GeneratedArtifact;
use crate::errors::ImageGenError;

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes the artifact under its own key with its content type.
    async fn put_artifact(
        &self,
        bucket: &str,
        artifact: GeneratedArtifact,
    ) -> Result<(), ImageGenError>;

    /// Returns a GET URL for `key` that stops working after `expires_in`.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ImageGenError>;
}

pub struct S3ArtifactStore {
    client: Client,
}

impl S3ArtifactStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Pins the client to `region` so URLs are signed for the bucket's region.
    #[must_use]
    pub fn from_sdk_config(sdk_config: &SdkConfig, region: &str) -> Self {
        let config = aws_sdk_s3::config::Builder::from(sdk_config)
            .region(Region::new(region.to_string()))
            .build();
        Self::new(Client::from_conf(config))
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put_artifact(
        &self,
        bucket: &str,
        artifact: GeneratedArtifact,
    ) -> Result<(), ImageGenError> {
        let size = artifact.content_bytes.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(&artifact.object_key)
            .content_type(artifact.content_type)
            .body(ByteStream::from(artifact.content_bytes))
            .send()
            .await
            .map_err(|e| {
                ImageGenError::StorageError(format!(
                    "S3 upload of {} failed: {}",
                    artifact.object_key,
                    DisplayErrorContext(&e)
                ))
            })?;

        info!(bucket = %bucket, key = %artifact.object_key, bytes = size, "Image uploaded to S3");
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ImageGenError> {
        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| {
            ImageGenError::StorageError(format!("Invalid presign expiry: {}", DisplayErrorContext(&e)))
        })?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                ImageGenError::StorageError(format!(
                    "Failed to presign {}: {}",
                    key,
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!(bucket = %bucket, key = %key, "Presigned GET URL issued");
        Ok(request.uri().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials};

    fn offline_store() -> S3ArtifactStore {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new(
                "AKIDEXAMPLE",
                "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
                None,
                None,
                "test",
            ))
            .build();
        S3ArtifactStore::new(Client::from_conf(config))
    }

    #[tokio::test]
    async fn presigned_url_carries_key_and_one_hour_expiry() {
        let store = offline_store();
        let url = store
            .presign_get(
                "generated-images",
                "0123456789abcdef0123456789abcdef.png",
                Duration::from_secs(3600),
            )
            .await
            .unwrap();

        assert!(url.starts_with("https://"));
        assert!(url.contains("generated-images"));
        assert!(url.contains("/0123456789abcdef0123456789abcdef.png?"));
        assert!(url.contains("X-Amz-Expires=3600"));
        assert!(url.contains("X-Amz-Signature="));
    }

    #[tokio::test]
    async fn presign_rejects_expiry_beyond_a_week() {
        let store = offline_store();
        let err = store
            .presign_get("generated-images", "a.png", Duration::from_secs(8 * 24 * 3600))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageGenError::StorageError(_)));
    }
}
