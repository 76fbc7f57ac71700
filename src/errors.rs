use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageGenError {
    #[error("{0}")]
    ConfigurationError(String),

    #[error("Failed to parse request body: {0}")]
    InputParsingError(String),

    #[error("Failed to generate image: {0}")]
    UpstreamServiceError(String),

    #[error("Failed to store image: {0}")]
    StorageError(String),
}

impl ImageGenError {
    /// Short tag used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ImageGenError::ConfigurationError(_) => "configuration",
            ImageGenError::InputParsingError(_) => "input_parsing",
            ImageGenError::UpstreamServiceError(_) => "upstream_service",
            ImageGenError::StorageError(_) => "storage",
        }
    }
}

impl From<serde_json::Error> for ImageGenError {
    fn from(error: serde_json::Error) -> Self {
        ImageGenError::InputParsingError(error.to_string())
    }
}
