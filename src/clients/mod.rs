//! Outbound AWS collaborators

pub mod bedrock;
pub mod s3;

pub use bedrock::{BedrockImageGenerator, ImageGenerator};
pub use s3::{ArtifactStore, S3ArtifactStore};
