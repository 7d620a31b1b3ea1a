//! Status Query Handlers

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::ports::AudioBackend;
use crate::application::queries::GetStatus;
use crate::application::services::BackendSelector;
use crate::domain::VoiceRegistry;

/// 服务状态
#[derive(Debug, Clone)]
pub struct StatusResponse {
    pub models_loaded: usize,
    pub available_voices: Vec<String>,
    pub default_voice: String,
    pub audio_backend: Option<AudioBackend>,
    pub engine: &'static str,
    pub started_at: DateTime<Utc>,
}

/// GetStatus Handler
pub struct GetStatusHandler {
    registry: Arc<VoiceRegistry>,
    selector: Arc<BackendSelector>,
    engine: &'static str,
    started_at: DateTime<Utc>,
}

impl GetStatusHandler {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        selector: Arc<BackendSelector>,
        engine: &'static str,
    ) -> Self {
        Self {
            registry,
            selector,
            engine,
            started_at: Utc::now(),
        }
    }

    pub async fn handle(&self, _query: GetStatus) -> StatusResponse {
        StatusResponse {
            models_loaded: self.registry.len(),
            available_voices: self.registry.names(),
            default_voice: self.registry.default_voice().to_string(),
            audio_backend: self.selector.available_backend().await,
            engine: self.engine,
            started_at: self.started_at,
        }
    }
}
