//! Data Transfer Objects
//!
//! HTTP 接口的请求/响应结构。`PlayAck` 与 `ErrorBody` 同时被 say 客户端反序列化。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{AudioBackend, StatusResponse, VoiceSummary};
use crate::domain::{Quality, Speed};

/// `/speak` 与 `/play` 的查询参数
///
/// 字段都是可选的：缺失的 text 由应用层统一报 `EmptyInput`。
#[derive(Debug, Default, Deserialize)]
pub struct SpeechParams {
    pub text: Option<String>,
    pub voice: Option<String>,
}

/// 错误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}

/// 播放确认
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayAck {
    pub status: String,
    pub text: String,
    pub voice: String,
    #[serde(default)]
    pub backend: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub speak: &'static str,
    pub play: &'static str,
    pub voices: &'static str,
}

/// 服务状态
#[derive(Debug, Serialize)]
pub struct StatusDto {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub models_loaded: usize,
    pub available_voices: Vec<String>,
    pub default_voice: String,
    pub audio_backend: Option<AudioBackend>,
    pub started_at: DateTime<Utc>,
    pub endpoints: Endpoints,
}

impl From<StatusResponse> for StatusDto {
    fn from(status: StatusResponse) -> Self {
        Self {
            service: "Ruler Voice Bridge",
            status: "running",
            version: env!("CARGO_PKG_VERSION"),
            engine: status.engine,
            models_loaded: status.models_loaded,
            available_voices: status.available_voices,
            default_voice: status.default_voice,
            audio_backend: status.audio_backend,
            started_at: status.started_at,
            endpoints: Endpoints {
                speak: "/speak?text=your+message&voice=amy",
                play: "/play?text=your+message&voice=danny",
                voices: "/voices",
            },
        }
    }
}

/// 音色摘要
#[derive(Debug, Serialize)]
pub struct VoiceDto {
    pub name: String,
    pub quality: Quality,
    pub speed: Speed,
    pub description: String,
    pub default: bool,
}

impl From<VoiceSummary> for VoiceDto {
    fn from(v: VoiceSummary) -> Self {
        Self {
            name: v.name,
            quality: v.quality,
            speed: v.speed,
            description: v.description,
            default: v.is_default,
        }
    }
}

/// 播放器重置结果
#[derive(Debug, Serialize)]
pub struct BackendDto {
    pub audio_backend: Option<AudioBackend>,
}
