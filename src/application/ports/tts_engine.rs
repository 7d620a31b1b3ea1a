//! TTS Engine Port - TTS 推理引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Failed to start engine: {0}")]
    SpawnError(String),

    #[error("Engine error: {0}")]
    EngineError(String),

    #[error("Invalid engine output: {0}")]
    InvalidOutput(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for TtsError {
    fn from(err: std::io::Error) -> Self {
        TtsError::IoError(err.to_string())
    }
}

/// TTS 推理请求
#[derive(Debug, Clone)]
pub struct InferRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 模型文件路径
    pub model_path: PathBuf,
    /// 音色名称（用于日志和追踪）
    pub voice: String,
}

/// TTS Engine Port
///
/// 外部 TTS 引擎的抽象接口。实现不得自行重试：同样的输入会得到同样的失败。
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行 TTS 推理，返回 WAV 容器字节
    async fn infer(&self, request: InferRequest) -> Result<Vec<u8>, TtsError>;

    /// 引擎名称（用于日志）
    fn name(&self) -> &'static str;
}
