//! Speech Commands - 合成与播放命令

use crate::application::ports::AudioBackend;
use crate::domain::AudioPayload;

/// 合成并返回音频（GET /speak）
#[derive(Debug, Clone, Default)]
pub struct SpeakCommand {
    pub text: Option<String>,
    pub voice: Option<String>,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SpeakResponse {
    pub voice: String,
    pub audio: AudioPayload,
}

/// 合成并在服务端本机播放（GET /play）
#[derive(Debug, Clone, Default)]
pub struct PlayCommand {
    pub text: Option<String>,
    pub voice: Option<String>,
}

/// 播放确认
#[derive(Debug, Clone)]
pub struct PlayResponse {
    pub text: String,
    pub voice: String,
    pub backend: AudioBackend,
}
