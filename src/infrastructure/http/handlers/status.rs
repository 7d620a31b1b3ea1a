//! Status Handlers - 服务状态、音色列表、播放器重置

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetStatus, ListVoices, ResetBackendCommand};
use crate::infrastructure::http::dto::{BackendDto, StatusDto, VoiceDto};
use crate::infrastructure::http::state::AppState;

/// GET / - 健康检查与状态
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusDto> {
    let status = state.status_handler.handle(GetStatus).await;
    Json(StatusDto::from(status))
}

/// GET /voices - 已加载音色
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<Vec<VoiceDto>> {
    let voices = state.list_voices_handler.handle(ListVoices);
    Json(voices.into_iter().map(VoiceDto::from).collect())
}

/// POST /backend/reset - 清除播放器探测缓存
pub async fn reset_backend(State(state): State<Arc<AppState>>) -> Json<BackendDto> {
    let result = state.reset_backend_handler.handle(ResetBackendCommand).await;
    tracing::info!(audio_backend = ?result.audio_backend, "Audio backend re-probed");
    Json(BackendDto {
        audio_backend: result.audio_backend,
    })
}
