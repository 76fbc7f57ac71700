use std::sync::Arc;

use aws_config::SdkConfig;
use tracing::info;

use crate::clients::{ArtifactStore, BedrockImageGenerator, ImageGenerator, S3ArtifactStore};
use crate::logging::LogControl;

/// Process-wide collaborators, built once per execution environment and
/// shared by every invocation that lands on it.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
    pub store: Arc<dyn ArtifactStore>,
    pub log_control: Option<LogControl>,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn ImageGenerator>,
        store: Arc<dyn ArtifactStore>,
        log_control: Option<LogControl>,
    ) -> Self {
        Self {
            generator,
            store,
            log_control,
        }
    }

    /// Builds the Bedrock and S3 clients from the shared AWS config.
    pub fn from_sdk_config(
        sdk_config: &SdkConfig,
        s3_region: &str,
        log_control: Option<LogControl>,
    ) -> Self {
        info!(s3_region = %s3_region, "Initializing AWS clients");
        let generator = BedrockImageGenerator::new(aws_sdk_bedrockruntime::Client::new(sdk_config));
        let store = S3ArtifactStore::from_sdk_config(sdk_config, s3_region);
        Self::new(Arc::new(generator), Arc::new(store), log_control)
    }
}
