//! Fakes and fixtures shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use imagegen::clients::{ArtifactStore, ImageGenerator};
use imagegen::core::models::{GeneratedArtifact, TextToImageRequest};
use imagegen::core::state::AppState;
use imagegen::errors::ImageGenError;
use imagegen::logging::LogControl;
use serde_json::{Value, json};

pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[derive(Default)]
pub struct FakeGenerator {
    pub calls: Mutex<Vec<(String, TextToImageRequest)>>,
    pub fail_with: Option<String>,
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(
        &self,
        model_id: &str,
        request: &TextToImageRequest,
    ) -> Result<Vec<u8>, ImageGenError> {
        self.calls
            .lock()
            .unwrap()
            .push((model_id.to_string(), request.clone()));
        match &self.fail_with {
            Some(msg) => Err(ImageGenError::UpstreamServiceError(msg.clone())),
            None => Ok(PNG_BYTES.to_vec()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct FakeStore {
    pub uploads: Mutex<Vec<StoredObject>>,
    pub presigns: Mutex<Vec<(String, String, Duration)>>,
    pub fail_presign: bool,
}

#[async_trait]
impl ArtifactStore for FakeStore {
    async fn put_artifact(
        &self,
        bucket: &str,
        artifact: GeneratedArtifact,
    ) -> Result<(), ImageGenError> {
        self.uploads.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: artifact.object_key,
            content_type: artifact.content_type.to_string(),
            bytes: artifact.content_bytes,
        });
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ImageGenError> {
        if self.fail_presign {
            return Err(ImageGenError::StorageError("signing failed".to_string()));
        }
        self.presigns
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string(), expires_in));
        Ok(format!(
            "https://{bucket}.s3.amazonaws.com/{key}?X-Amz-Expires={}&X-Amz-Signature=deadbeef",
            expires_in.as_secs()
        ))
    }
}

pub struct Harness {
    pub generator: Arc<FakeGenerator>,
    pub store: Arc<FakeStore>,
    pub state: AppState,
}

pub fn harness(generator: FakeGenerator, store: FakeStore) -> Harness {
    harness_with_log_control(generator, store, None)
}

pub fn harness_with_log_control(
    generator: FakeGenerator,
    store: FakeStore,
    log_control: Option<LogControl>,
) -> Harness {
    let generator = Arc::new(generator);
    let store = Arc::new(store);
    let state = AppState::new(generator.clone(), store.clone(), log_control);
    Harness {
        generator,
        store,
        state,
    }
}

pub fn env_with(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

pub fn default_env() -> impl Fn(&str) -> Option<String> {
    env_with(&[("S3_BUCKET_NAME", "generated-images")])
}

pub fn event_with_prompt(prompt: &str) -> Value {
    json!({ "body": json!({ "input_text": prompt }).to_string() })
}

pub fn error_message(response: &Value) -> String {
    assert_eq!(response["statusCode"], 500);
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

pub fn presigned_url(response: &Value) -> String {
    assert_eq!(response["statusCode"], 200);
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    body["presigned_url"].as_str().unwrap().to_string()
}
