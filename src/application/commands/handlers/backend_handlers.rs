//! Backend Command Handlers

use std::sync::Arc;

use crate::application::commands::{ResetBackendCommand, ResetBackendResponse};
use crate::application::services::BackendSelector;

/// ResetBackend Handler
pub struct ResetBackendHandler {
    selector: Arc<BackendSelector>,
}

impl ResetBackendHandler {
    pub fn new(selector: Arc<BackendSelector>) -> Self {
        Self { selector }
    }

    pub async fn handle(&self, _cmd: ResetBackendCommand) -> ResetBackendResponse {
        self.selector.reset().await;
        ResetBackendResponse {
            audio_backend: self.selector.available_backend().await,
        }
    }
}
