use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ImageGenError;

pub const PNG_CONTENT_TYPE: &str = "image/png";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const PNG_SUFFIX: &str = ".png";

/// Body of an inbound request, decoded from the proxy event's `body` string.
#[derive(Debug, Default, Deserialize)]
pub struct InvocationRequest {
    #[serde(default)]
    pub input_text: Option<String>,
}

impl InvocationRequest {
    /// Decodes the body, which must be a JSON object. Serde would otherwise
    /// accept a positional array for a struct.
    pub fn from_body(body: &str) -> Result<Self, ImageGenError> {
        match serde_json::from_str::<Value>(body)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(ImageGenError::InputParsingError(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Returns the prompt, rejecting requests that never supplied one.
    ///
    /// An empty string is forwarded as-is; only an absent field is an error.
    pub fn prompt(&self) -> Result<&str, ImageGenError> {
        self.input_text
            .as_deref()
            .ok_or_else(|| ImageGenError::InputParsingError("input_text was not specified".into()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPrompt {
    pub text: String,
}

/// Request body for the Stability text-to-image models on Bedrock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
}

impl TextToImageRequest {
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            text_prompts: vec![TextPrompt {
                text: prompt.to_string(),
            }],
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ImageGenError> {
        serde_json::to_vec(self).map_err(|e| {
            ImageGenError::UpstreamServiceError(format!("Failed to serialize model request: {e}"))
        })
    }
}

/// An image returned by the model, ready to be written to the bucket.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub object_key: String,
    pub content_bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl GeneratedArtifact {
    #[must_use]
    pub fn png(artifact_id: &str, content_bytes: Vec<u8>) -> Self {
        Self {
            object_key: object_key_for(artifact_id),
            content_bytes,
            content_type: PNG_CONTENT_TYPE,
        }
    }
}

/// 128-bit random id, hex encoded without separators.
#[must_use]
pub fn new_artifact_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[must_use]
pub fn object_key_for(artifact_id: &str) -> String {
    format!("{artifact_id}{PNG_SUFFIX}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignedUrlResponse {
    pub presigned_url: String,
}
