use std::sync::Arc;

use imagegen::core::config::s3_region_from_env;
use imagegen::core::state::AppState;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let log_control = imagegen::setup_logging();

    let shared_config = aws_config::from_env().load().await;
    let state = Arc::new(AppState::from_sdk_config(
        &shared_config,
        &s3_region_from_env(),
        Some(log_control),
    ));

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { imagegen::api::handler(event, &state).await }
    }))
    .await
}
