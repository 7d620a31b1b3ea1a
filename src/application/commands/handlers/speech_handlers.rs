//! Speech Command Handlers
//!
//! 请求流程: Received -> Validated -> VoiceResolved -> Synthesized -> {Returned | Played}
//!
//! Speak 与 Play 共用同一段 校验/解析/合成 流程，只在最后一步分叉。

use std::sync::Arc;

use crate::application::commands::{PlayCommand, PlayResponse, SpeakCommand, SpeakResponse};
use crate::application::error::ApplicationError;
use crate::application::services::{BackendSelector, Synthesizer};
use crate::domain::{AudioPayload, VoiceRegistry};

/// 已合成的语音
struct Rendered {
    text: String,
    voice: String,
    audio: AudioPayload,
}

/// 校验 -> 解析音色 -> 合成
#[derive(Clone)]
struct SpeechPipeline {
    registry: Arc<VoiceRegistry>,
    synthesizer: Arc<Synthesizer>,
}

impl SpeechPipeline {
    async fn render(
        &self,
        text: Option<String>,
        voice: Option<&str>,
    ) -> Result<Rendered, ApplicationError> {
        // 先校验，空文本不做任何解析或合成
        let text = text
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApplicationError::EmptyInput)?;

        let descriptor = self.registry.resolve(voice)?;
        let audio = self.synthesizer.synthesize(&text, descriptor).await?;

        Ok(Rendered {
            text,
            voice: descriptor.name().to_string(),
            audio,
        })
    }
}

/// Speak Handler - 返回音频字节，不涉及播放器
pub struct SpeakHandler {
    pipeline: SpeechPipeline,
}

impl SpeakHandler {
    pub fn new(registry: Arc<VoiceRegistry>, synthesizer: Arc<Synthesizer>) -> Self {
        Self {
            pipeline: SpeechPipeline {
                registry,
                synthesizer,
            },
        }
    }

    pub async fn handle(&self, cmd: SpeakCommand) -> Result<SpeakResponse, ApplicationError> {
        let rendered = self.pipeline.render(cmd.text, cmd.voice.as_deref()).await?;

        Ok(SpeakResponse {
            voice: rendered.voice,
            audio: rendered.audio,
        })
    }
}

/// Play Handler - 合成后交给播放器
pub struct PlayHandler {
    pipeline: SpeechPipeline,
    selector: Arc<BackendSelector>,
}

impl PlayHandler {
    pub fn new(
        registry: Arc<VoiceRegistry>,
        synthesizer: Arc<Synthesizer>,
        selector: Arc<BackendSelector>,
    ) -> Self {
        Self {
            pipeline: SpeechPipeline {
                registry,
                synthesizer,
            },
            selector,
        }
    }

    pub async fn handle(&self, cmd: PlayCommand) -> Result<PlayResponse, ApplicationError> {
        let rendered = self.pipeline.render(cmd.text, cmd.voice.as_deref()).await?;

        let backend = self
            .selector
            .available_backend()
            .await
            .ok_or(ApplicationError::NoAudioBackend)?;

        self.selector.play(&rendered.audio, backend).await?;

        tracing::info!(
            voice = %rendered.voice,
            backend = %backend,
            duration_ms = rendered.audio.duration_ms(),
            "Speech played"
        );

        Ok(PlayResponse {
            text: rendered.text,
            voice: rendered.voice,
            backend,
        })
    }
}
