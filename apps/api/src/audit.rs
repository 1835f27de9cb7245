//! Fire-and-forget audit notifications, sent after a response has been built.
//! A failing sink is logged and never affects the caller.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditKind {
    CareerRecommendation {
        field: String,
        used_fallback: bool,
    },
    ResumeAnalysis {
        file_extension: String,
        ats_score: u32,
        ai_feedback: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: AuditKind,
}

impl AuditEvent {
    pub fn new(kind: AuditKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            at: Utc::now(),
            kind,
        }
    }
}

pub trait AuditSink: Send + Sync {
    /// Must return without waiting on I/O.
    fn dispatch(&self, event: AuditEvent);
}

/// Writes each event as a structured log line.
pub struct LogAuditSink;

impl AuditSink for LogAuditSink {
    fn dispatch(&self, event: AuditEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => info!(audit = %json, "audit event"),
            Err(e) => warn!("Failed to serialize audit event {}: {e}", event.id),
        }
    }
}

/// POSTs each event as JSON on a spawned task.
#[derive(Clone)]
pub struct WebhookAuditSink {
    client: Client,
    url: String,
}

impl WebhookAuditSink {
    pub fn new(url: String) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(5)).build()?,
            url,
        })
    }
}

impl AuditSink for WebhookAuditSink {
    fn dispatch(&self, event: AuditEvent) {
        let client = self.client.clone();
        let url = self.url.clone();
        tokio::spawn(async move {
            let result = client
                .post(&url)
                .json(&event)
                .send()
                .await
                .and_then(|r| r.error_for_status());
            if let Err(e) = result {
                warn!("Audit webhook delivery failed for {}: {e}", event.id);
            }
        });
    }
}
