//! 应用层错误定义
//!
//! 单次请求内的错误分类，任何错误只影响触发它的请求

use std::time::Duration;
use thiserror::Error;

use crate::domain::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 文本缺失或为空
    #[error("Empty input: text must not be empty")]
    EmptyInput,

    /// 请求的音色不在注册表中
    #[error("Voice '{name}' not available. Choose from: [{}]", available.join(", "))]
    UnknownVoice {
        name: String,
        available: Vec<String>,
    },

    /// 引擎返回错误或输出无效，不自动重试
    #[error("TTS generation failed: {0}")]
    SynthesisFailed(String),

    /// 引擎调用超时
    #[error("TTS generation timed out after {0:?}")]
    SynthesisTimeout(Duration),

    /// 本机没有可用的播放器
    #[error("No audio player available. Install pulseaudio-utils, alsa-utils, sox, or ffmpeg")]
    NoAudioBackend,

    /// 播放器执行失败
    #[error("Audio playback failed: {0}")]
    PlaybackFailed(String),
}

impl ApplicationError {
    /// 稳定的错误类别名（对外 JSON 的 `kind` 字段）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::UnknownVoice { .. } => "UnknownVoice",
            Self::SynthesisFailed(_) => "SynthesisFailed",
            Self::SynthesisTimeout(_) => "SynthesisTimeout",
            Self::NoAudioBackend => "NoAudioBackend",
            Self::PlaybackFailed(_) => "PlaybackFailed",
        }
    }

    /// 创建合成失败错误
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::SynthesisFailed(message.into())
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::UnknownVoice { name, available } => Self::UnknownVoice { name, available },
        }
    }
}

impl From<crate::application::ports::PlaybackError> for ApplicationError {
    fn from(err: crate::application::ports::PlaybackError) -> Self {
        Self::PlaybackFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_voice_lists_available() {
        let err = ApplicationError::from(VoiceError::UnknownVoice {
            name: "missingvoice".to_string(),
            available: vec!["amy".to_string(), "ryan".to_string()],
        });
        assert_eq!(err.kind(), "UnknownVoice");
        assert_eq!(
            err.to_string(),
            "Voice 'missingvoice' not available. Choose from: [amy, ryan]"
        );
    }

    #[test]
    fn test_empty_input_message() {
        assert!(ApplicationError::EmptyInput
            .to_string()
            .to_lowercase()
            .contains("empty input"));
    }
}
