//! Application State
//!
//! 请求处理器共享的只读状态：音色注册表、合成器、播放器选择器及其上的 Handlers

use std::sync::Arc;

use crate::application::{
    BackendSelector, GetStatusHandler, ListVoicesHandler, PlayHandler, ResetBackendHandler,
    SpeakHandler, Synthesizer,
};
use crate::domain::VoiceRegistry;

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub speak_handler: SpeakHandler,
    pub play_handler: PlayHandler,
    pub reset_backend_handler: ResetBackendHandler,

    // ========== Query Handlers ==========
    pub status_handler: GetStatusHandler,
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        synthesizer: Arc<Synthesizer>,
        selector: Arc<BackendSelector>,
    ) -> Self {
        let engine = synthesizer.engine_name();
        Self {
            speak_handler: SpeakHandler::new(registry.clone(), synthesizer.clone()),
            play_handler: PlayHandler::new(registry.clone(), synthesizer, selector.clone()),
            reset_backend_handler: ResetBackendHandler::new(selector.clone()),

            status_handler: GetStatusHandler::new(registry.clone(), selector, engine),
            list_voices_handler: ListVoicesHandler::new(registry),
        }
    }
}
