//! Speech Handlers - /speak 与 /play

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use http::header;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{PlayCommand, SpeakCommand};
use crate::domain::AudioPayload;
use crate::infrastructure::http::dto::{PlayAck, SpeechParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /speak - 合成并返回 WAV
pub async fn speak(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SpeechParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, voice = ?params.voice, "Speak request");

    let result = state
        .speak_handler
        .handle(SpeakCommand {
            text: params.text,
            voice: params.voice,
        })
        .await?;

    tracing::info!(
        %request_id,
        voice = %result.voice,
        audio_size = result.audio.len(),
        "Speak request completed"
    );

    let audio = result.audio.into_bytes();
    Ok((
        [
            (header::CONTENT_TYPE, AudioPayload::CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"speech.wav\""),
        ],
        audio,
    )
        .into_response())
}

/// GET /play - 合成并在服务端播放
pub async fn play(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SpeechParams>, QueryRejection>,
) -> Result<Json<PlayAck>, ApiError> {
    let Query(params) = params?;
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, voice = ?params.voice, "Play request");

    let result = state
        .play_handler
        .handle(PlayCommand {
            text: params.text,
            voice: params.voice,
        })
        .await?;

    Ok(Json(PlayAck {
        status: "played".to_string(),
        text: result.text,
        voice: result.voice,
        backend: Some(result.backend.to_string()),
    }))
}
