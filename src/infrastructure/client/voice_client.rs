//! Voice Client - 调用语音服务的 HTTP 客户端
//!
//! say 命令行使用：把文本发给服务端的 `/play` 接口，不做任何合成。
//!
//! GET {base_url}/play?text=...&voice=...
//! 成功: `{"status": "played", ...}`；失败: `{"error": "...", "kind": "..."}`

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::infrastructure::http::dto::{ErrorBody, PlayAck};

/// 服务地址环境变量
pub const SERVER_URL_ENV: &str = "RULER_VOICE_URL";
/// 默认服务地址
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9003";

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Empty input: nothing to say")]
    EmptyInput,

    #[error("Cannot reach voice server at {url}: {message}")]
    Network { url: String, message: String },

    #[error("Request to voice server timed out")]
    Timeout,

    #[error("{kind}: {message}")]
    Server {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("Invalid response from voice server: {0}")]
    InvalidResponse(String),
}

/// 客户端配置
#[derive(Debug, Clone)]
pub struct VoiceClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时（秒），需覆盖合成与播放的总时长
    pub timeout_secs: u64,
}

impl Default for VoiceClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl VoiceClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

pub struct VoiceClient {
    client: Client,
    config: VoiceClientConfig,
}

impl VoiceClient {
    pub fn new(config: VoiceClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Network {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    fn play_url(&self) -> String {
        format!("{}/play", self.config.base_url.trim_end_matches('/'))
    }

    /// 请求服务端播放 `text`
    pub async fn play(&self, text: &str, voice: Option<&str>) -> Result<PlayAck, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let mut query = vec![("text", text)];
        if let Some(voice) = voice.filter(|v| !v.is_empty()) {
            query.push(("voice", voice));
        }

        let url = self.play_url();
        tracing::debug!(url = %url, text_len = text.len(), voice = ?voice, "Sending play request");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout
                } else {
                    ClientError::Network {
                        url: self.config.base_url.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(err) => ClientError::Server {
                    status: status.as_u16(),
                    kind: err.kind,
                    message: err.error,
                },
                Err(_) => ClientError::Server {
                    status: status.as_u16(),
                    kind: format!("HTTP {}", status.as_u16()),
                    message: String::from_utf8_lossy(&body).trim().to_string(),
                },
            });
        }

        serde_json::from_slice::<PlayAck>(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
