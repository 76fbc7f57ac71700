//! imagegen - text-to-image generation behind an API Gateway Lambda.
//!
//! A single Lambda receives a prompt, renders it with a Stability model on
//! Amazon Bedrock, stores the PNG in S3 and answers with a presigned URL
//! that stays valid for one hour.
//!
//! # Architecture
//!
//! The crate uses:
//! - AWS Lambda (`lambda_runtime`) for serverless execution
//! - Bedrock Runtime for image generation
//! - S3 for storage and presigned retrieval
//! - `tracing` with JSON output for `CloudWatch` Logs
//!
//! The AWS clients are created once at cold start inside
//! [`core::state::AppState`] and handed to every invocation.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use imagegen::core::state::AppState;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     let log_control = imagegen::setup_logging();
//!     let shared_config = aws_config::from_env().load().await;
//!     let state = Arc::new(AppState::from_sdk_config(&shared_config, "us-east-1", Some(log_control)));
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(move |event| {
//!         let state = Arc::clone(&state);
//!         async move { imagegen::api::handler(event, &state).await }
//!     }))
//!     .await
//! }
//! ```

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod logging;

pub use errors::ImageGenError;
pub use logging::{LogControl, setup_logging};
