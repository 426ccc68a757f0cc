mod http_handler;

use std::sync::Arc;

use gallery_shared::{AppState, Config};
use http_handler::function_handler;
use lambda_http::{run, service_fn, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        // CloudWatch stamps each line already
        .without_time()
        .init();

    let config = Config::from_env();
    tracing::info!("gallery webapp starting, gateway at {}", config.gateway_url);

    let state = Arc::new(AppState {
        http: reqwest::Client::new(),
        config,
    });

    run(service_fn(move |event| {
        let state = state.clone();
        async move { function_handler(event, state).await }
    }))
    .await
}
