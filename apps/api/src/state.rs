use std::sync::Arc;

use crate::audit::AuditSink;
use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::status::AiStatus;
use crate::upskill::db::UpskillDb;
use crate::upskill::videos::VideoSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
    /// Pluggable video search. Default: YouTubeSearch (empty results without a key).
    pub videos: Arc<dyn VideoSearch>,
    pub upskill_db: Arc<UpskillDb>,
    /// AI health record served at /api-status; last write wins.
    pub ai_status: Arc<AiStatus>,
    pub audit: Arc<dyn AuditSink>,
    pub config: Config,
}
