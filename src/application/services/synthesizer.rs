//! Synthesizer - 合成适配层
//!
//! 包装 TtsEnginePort：
//! - 空文本直接拒绝，不调用引擎
//! - 单次请求超时（默认 30s），超时即放弃引擎调用
//! - 校验引擎输出为 WAV，并按配置插入前置静音
//! - 失败不重试

use std::sync::Arc;
use std::time::Duration;

use crate::application::error::ApplicationError;
use crate::application::ports::{InferRequest, TtsEnginePort};
use crate::domain::audio::wav;
use crate::domain::{AudioPayload, VoiceDescriptor};

/// 合成配置
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// 单次合成超时
    pub timeout: Duration,
    /// 前置静音（秒）
    pub silence_padding: f32,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            silence_padding: 0.2,
        }
    }
}

pub struct Synthesizer {
    engine: Arc<dyn TtsEnginePort>,
    config: SynthesizerConfig,
}

impl Synthesizer {
    pub fn new(engine: Arc<dyn TtsEnginePort>, config: SynthesizerConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// 使用 `voice` 合成 `text`
    pub async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceDescriptor,
    ) -> Result<AudioPayload, ApplicationError> {
        if text.trim().is_empty() {
            return Err(ApplicationError::EmptyInput);
        }

        let request = InferRequest {
            text: text.to_string(),
            model_path: voice.model_path().to_path_buf(),
            voice: voice.name().to_string(),
        };

        tracing::debug!(
            engine = self.engine.name(),
            voice = %voice.name(),
            text_len = text.len(),
            "Synthesizing"
        );

        // 超时会丢弃引擎 future，由适配器负责清理子进程
        let raw = match tokio::time::timeout(self.config.timeout, self.engine.infer(request)).await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                tracing::error!(voice = %voice.name(), error = %e, "TTS generation failed");
                return Err(ApplicationError::synthesis(e.to_string()));
            }
            Err(_) => {
                tracing::error!(
                    voice = %voice.name(),
                    timeout = ?self.config.timeout,
                    "TTS generation timed out"
                );
                return Err(ApplicationError::SynthesisTimeout(self.config.timeout));
            }
        };

        let data = if self.config.silence_padding > 0.0 {
            wav::prepend_silence(&raw, self.config.silence_padding)
                .map_err(|e| ApplicationError::synthesis(e.to_string()))?
        } else {
            raw
        };

        let info = wav::probe(&data).map_err(|e| ApplicationError::synthesis(e.to_string()))?;

        tracing::info!(
            voice = %voice.name(),
            duration_ms = info.duration_ms,
            sample_rate = info.sample_rate,
            audio_size = data.len(),
            "Speech synthesized"
        );

        Ok(AudioPayload::new(data, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Quality, Speed};
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig};

    fn amy() -> VoiceDescriptor {
        VoiceDescriptor::new(
            "amy",
            "/voices/en_US-amy-medium.onnx",
            Quality::Medium,
            Speed::Fast,
            "test voice",
        )
    }

    fn synthesizer(engine: Arc<FakeTtsClient>, config: SynthesizerConfig) -> Synthesizer {
        Synthesizer::new(engine, config)
    }

    #[tokio::test]
    async fn test_empty_text_never_reaches_engine() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let synth = synthesizer(engine.clone(), SynthesizerConfig::default());

        for text in ["", "   ", "\n"] {
            let err = synth.synthesize(text, &amy()).await.unwrap_err();
            assert!(matches!(err, ApplicationError::EmptyInput));
        }
        assert_eq!(engine.calls(), 0);
    }

    #[tokio::test]
    async fn test_synthesize_returns_wav() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let synth = synthesizer(engine.clone(), SynthesizerConfig::default());

        let payload = synth.synthesize("Hello", &amy()).await.unwrap();
        assert!(!payload.is_empty());
        assert_eq!(&payload.as_bytes()[0..4], b"RIFF");
        assert_eq!(engine.calls(), 1);
        assert_eq!(engine.last_model().unwrap(), amy().model_path());
    }

    #[tokio::test]
    async fn test_silence_padding_is_prepended() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let padded = synthesizer(
            engine.clone(),
            SynthesizerConfig {
                silence_padding: 0.5,
                ..Default::default()
            },
        );
        let bare = synthesizer(
            engine,
            SynthesizerConfig {
                silence_padding: 0.0,
                ..Default::default()
            },
        );

        let with = padded.synthesize("Hello", &amy()).await.unwrap();
        let without = bare.synthesize("Hello", &amy()).await.unwrap();
        // 22050Hz * 0.5s * 2 bytes
        assert_eq!(with.len() - without.len(), 22050);
        assert!(with.duration_ms() >= without.duration_ms() + 490);
    }

    #[tokio::test]
    async fn test_engine_failure_is_not_retried() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
            failure: Some("model corrupt".to_string()),
            ..Default::default()
        }));
        let synth = synthesizer(engine.clone(), SynthesizerConfig::default());

        let err = synth.synthesize("Hello", &amy()).await.unwrap_err();
        assert_eq!(err.kind(), "SynthesisFailed");
        assert!(err.to_string().contains("model corrupt"));
        assert_eq!(engine.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_engine_output_fails() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
            raw_output: Some(b"this is not a wav file".to_vec()),
            ..Default::default()
        }));
        let synth = synthesizer(engine, SynthesizerConfig::default());

        let err = synth.synthesize("Hello", &amy()).await.unwrap_err();
        assert_eq!(err.kind(), "SynthesisFailed");
    }

    #[tokio::test]
    async fn test_slow_engine_times_out() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
            latency: Duration::from_secs(5),
            ..Default::default()
        }));
        let synth = synthesizer(
            engine,
            SynthesizerConfig {
                timeout: Duration::from_millis(50),
                ..Default::default()
            },
        );

        let err = synth.synthesize("Hello", &amy()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::SynthesisTimeout(d) if d == Duration::from_millis(50)));
        assert_eq!(err.kind(), "SynthesisTimeout");
    }
}
