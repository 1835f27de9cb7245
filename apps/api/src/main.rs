mod audit;
mod career;
mod config;
mod errors;
mod llm_client;
mod resume;
mod routes;
mod state;
mod status;
mod upskill;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::{AuditSink, LogAuditSink, WebhookAuditSink};
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::status::AiStatus;
use crate::upskill::db::UpskillDb;
use crate::upskill::videos::YouTubeSearch;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Guidefy API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
        config.ai_timeout,
    )?;
    if config.gemini_api_key.is_some() {
        info!("LLM client initialized (model: {})", llm.model());
    } else {
        tracing::warn!("GEMINI_API_KEY not set; career and resume feedback will use fallbacks");
    }
    let ai_status = Arc::new(AiStatus::new(config.gemini_api_key.is_some()));

    // Initialize video search (returns nothing without a key)
    let videos = YouTubeSearch::new(
        config.youtube_api_key.clone(),
        config.youtube_base_url.clone(),
        config.video_timeout,
    )?;

    // Load the upskill table once
    let upskill_db = UpskillDb::load_or_embedded(&config.upskill_db_path)?;

    let audit: Arc<dyn AuditSink> = match &config.audit_webhook_url {
        Some(url) => {
            info!("Audit events delivered to webhook");
            Arc::new(WebhookAuditSink::new(url.clone())?)
        }
        None => Arc::new(LogAuditSink),
    };

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        videos: Arc::new(videos),
        upskill_db: Arc::new(upskill_db),
        ai_status,
        audit,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
