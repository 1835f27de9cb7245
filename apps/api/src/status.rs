//! Process-wide AI health record served at `/api-status`.
//!
//! Shared through `AppState` as `Arc<AiStatus>`. Every AI-dependent request
//! overwrites it; concurrent requests race and the last write wins.

use parking_lot::RwLock;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AiHealth {
    pub api_key_loaded: bool,
    pub model_responded: bool,
    pub model_parsed: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
pub struct AiStatus {
    inner: RwLock<AiHealth>,
}

impl AiStatus {
    pub fn new(api_key_loaded: bool) -> Self {
        Self {
            inner: RwLock::new(AiHealth {
                api_key_loaded,
                ..Default::default()
            }),
        }
    }

    pub fn snapshot(&self) -> AiHealth {
        self.inner.read().clone()
    }

    pub fn record_success(&self) {
        let mut health = self.inner.write();
        health.model_responded = true;
        health.model_parsed = true;
        health.last_error = None;
    }

    /// The model answered but its reply held no usable JSON.
    pub fn record_parse_failed(&self, error: &str) {
        let mut health = self.inner.write();
        health.model_responded = true;
        health.model_parsed = false;
        health.last_error = Some(error.to_string());
    }

    /// The call never produced a reply (missing key, transport, API error, timeout).
    pub fn record_call_failed(&self, error: &str) {
        let mut health = self.inner.write();
        health.model_responded = false;
        health.model_parsed = false;
        health.last_error = Some(error.to_string());
    }
}
