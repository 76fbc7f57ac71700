//! API Gateway proxy response builders.

use serde_json::{Value, json};

use crate::core::models::PresignedUrlResponse;
use crate::errors::ImageGenError;

/// Returns a 200 OK response carrying the presigned URL.
#[must_use]
pub fn ok_presigned(response: &PresignedUrlResponse) -> Value {
    json!({
        "statusCode": 200,
        "body": json!(response).to_string()
    })
}

/// Returns a 500 response whose body is the error message as a JSON string.
#[must_use]
pub fn err_response(error: &ImageGenError) -> Value {
    json!({
        "statusCode": 500,
        "body": Value::String(error.to_string()).to_string()
    })
}
