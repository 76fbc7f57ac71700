//! Lambda handler: prompt in, presigned image URL out.
//!
//! Every invocation runs the same linear pipeline:
//! - resolve `LOG_LEVEL` and `S3_BUCKET_NAME`
//! - decode the proxy body and pull out `input_text`
//! - generate a PNG on Bedrock
//! - upload it to S3 under a random key and presign a GET for it
//!
//! Any failure is logged and turned into a uniform 500 response.

use std::env;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::helpers;
use crate::core::config::{AppConfig, LogLevel, resolve_log_level};
use crate::core::models::{
    GeneratedArtifact, InvocationRequest, PresignedUrlResponse, TextToImageRequest,
    new_artifact_id,
};
use crate::core::state::AppState;
use crate::errors::ImageGenError;

pub use self::function_handler as handler;

pub const PRESIGNED_URL_EXPIRY_SECS: i64 = 3600;
pub const PRESIGNED_URL_EXPIRY: Duration =
    Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS.unsigned_abs());

/// Emits the closing log line on every exit path.
struct CompletionLog;

impl Drop for CompletionLog {
    fn drop(&mut self) {
        info!("complete.");
    }
}

/// Lambda handler for the API Gateway proxy integration.
///
/// # Errors
///
/// Never fails for request-level problems; those become a 500 payload.
#[tracing::instrument(level = "info", skip(event, state), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>, state: &AppState) -> Result<Value, Error> {
    Ok(handle_request(state, |name| env::var(name).ok(), &event.payload).await)
}

/// Runs one invocation against an explicit variable source.
pub async fn handle_request<F>(state: &AppState, lookup: F, payload: &Value) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let _complete = CompletionLog;
    info!("start");
    info!("event: {:?}", payload);

    match generate_presigned_image(state, &lookup, payload).await {
        Ok(response) => helpers::ok_presigned(&response),
        Err(e) => {
            error!(error_kind = e.kind(), "{}", e);
            helpers::err_response(&e)
        }
    }
}

async fn generate_presigned_image<F>(
    state: &AppState,
    lookup: &F,
    payload: &Value,
) -> Result<PresignedUrlResponse, ImageGenError>
where
    F: Fn(&str) -> Option<String>,
{
    let log_level = resolve_log_level(lookup)?;
    apply_log_level(state, log_level);

    let config = AppConfig::from_lookup(lookup)?;
    let artifact_id = new_artifact_id();

    let request = parse_invocation(payload)?;
    let prompt = request.prompt()?;

    let image = state
        .generator
        .generate(&config.model_id, &TextToImageRequest::from_prompt(prompt))
        .await?;

    let artifact = GeneratedArtifact::png(&artifact_id, image);
    let object_key = artifact.object_key.clone();
    state
        .store
        .put_artifact(&config.s3_bucket_name, artifact)
        .await?;

    let presigned_url = state
        .store
        .presign_get(&config.s3_bucket_name, &object_key, PRESIGNED_URL_EXPIRY)
        .await
        .inspect_err(|_| {
            warn!(bucket = %config.s3_bucket_name, key = %object_key, "Uploaded image left without a URL");
        })?;

    let expires_at = Utc::now() + TimeDelta::seconds(PRESIGNED_URL_EXPIRY_SECS);
    info!(key = %object_key, expires_at = %expires_at.to_rfc3339(), "Presigned URL issued");

    Ok(PresignedUrlResponse { presigned_url })
}

fn apply_log_level(state: &AppState, level: LogLevel) {
    if let Some(control) = &state.log_control {
        if let Err(e) = control.apply(level) {
            warn!("Failed to apply log level {}: {}", level, e);
        }
    }
}

/// Extracts and decodes the proxy event's `body` string.
fn parse_invocation(payload: &Value) -> Result<InvocationRequest, ImageGenError> {
    let body = match payload.get("body") {
        Some(Value::String(body)) => body,
        Some(Value::Null) | None => {
            return Err(ImageGenError::InputParsingError("Missing body".to_string()));
        }
        Some(_) => {
            return Err(ImageGenError::InputParsingError(
                "Invalid body format".to_string(),
            ));
        }
    };

    InvocationRequest::from_body(body)
}
