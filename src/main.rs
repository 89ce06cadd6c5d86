//! CoCreate Study server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cocreate_study::adapters::ai::{OpenAIConfig, OpenAIProvider};
use cocreate_study::adapters::http::{study_router, StudyAppState};
use cocreate_study::adapters::storage::{InMemorySessionRepository, JsonSubmissionStore};
use cocreate_study::config::{AiConfig, AppConfig, ServerConfig};
use cocreate_study::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    if !config.ai.has_openai() {
        tracing::warn!("No OpenAI API key configured; chat is disabled");
    }
    let ai_provider = build_ai_provider(&config.ai)?;

    let store = Arc::new(JsonSubmissionStore::new(&config.study.submissions_dir));
    let state = StudyAppState {
        sessions: Arc::new(InMemorySessionRepository::new()),
        writer: store.clone(),
        reader: store,
        ai_provider,
        admin_password: config.study.admin_password.clone(),
        turn_limit: config.study.turn_limit,
        max_tokens: config.ai.max_tokens,
    };

    let app = study_router(state, &config.server.cors_origins_list());
    let addr = config.server.socket_addr()?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        submissions_dir = %config.study.submissions_dir.display(),
        turn_limit = config.study.turn_limit,
        "Starting CoCreate Study server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_ai_provider(
    ai: &AiConfig,
) -> Result<Option<Arc<dyn AIProvider>>, Box<dyn std::error::Error>> {
    let Some(key) = ai.openai_api_key() else {
        return Ok(None);
    };

    let mut openai = OpenAIConfig::new(key)
        .with_model(ai.model.clone())
        .with_base_url(ai.base_url.clone())
        .with_max_tokens(ai.max_tokens);
    if let Some(timeout) = ai.timeout() {
        openai = openai.with_timeout(timeout);
    }

    let provider: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(openai)?);
    tracing::info!(model = %ai.model, "OpenAI provider configured");
    Ok(Some(provider))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
