use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use derm_core::constants::DEFAULT_REST_ADDR;
use derm_core::{
    AnalysisService, ChatCompletionClient, CoreConfig, DiseaseInfoService, RemoteClassifier,
};

/// Main entry point for the skin disease detection service
///
/// Resolves configuration once, wires the classifier and LLM collaborators
/// into the analysis pipeline and serves the REST API.
///
/// # Environment Variables
/// - `DERM_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `DEEPSEEK_API`: bearer token for the chat-completion endpoint
/// - `DEEPSEEK_URL`: chat-completion endpoint; when unset every disease lookup uses fallback content
/// - `DEEPSEEK_MODEL`: model identifier (default: "deepseek/deepseek-chat")
/// - `DEEPSEEK_TIMEOUT_SECS`: completion timeout (default: 30)
/// - `CLASSIFIER_URL`: image classifier endpoint
/// - `DISEASE_INFO_CACHE_SIZE`: number of cached diseases (default: 100)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("derm=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env()?;
    if cfg.completion().api_url.is_none() {
        tracing::warn!("DEEPSEEK_URL is not set; disease info will use fallback content");
    }
    if cfg.classifier().url.is_none() {
        tracing::warn!("CLASSIFIER_URL is not set; analysis requests will fail");
    }

    let completion = ChatCompletionClient::new(cfg.completion().clone())?;
    let disease_info = DiseaseInfoService::new(Arc::new(completion), cfg.disease_info_cache_size());
    let classifier = RemoteClassifier::new(cfg.classifier())?;
    let analysis = AnalysisService::new(Arc::new(classifier), disease_info);

    let addr = std::env::var("DERM_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    tracing::info!("++ Starting derm REST on {}", addr);

    let app = api_rest::router(AppState::new(analysis));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
