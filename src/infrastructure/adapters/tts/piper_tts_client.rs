//! Piper TTS Client - 调用本机 piper 可执行程序
//!
//! 实现 TtsEnginePort trait：
//! `piper --model <model.onnx> --output_file <tmp.wav>`，文本从 stdin 写入
//!
//! 子进程设置了 kill_on_drop：请求超时或客户端断开导致 future 被丢弃时，
//! 引擎进程随之结束。

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{InferRequest, TtsEnginePort, TtsError};

/// Piper 客户端配置
#[derive(Debug, Clone)]
pub struct PiperTtsClientConfig {
    /// piper 可执行程序（名称或路径）
    pub binary: PathBuf,
}

impl Default for PiperTtsClientConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("piper"),
        }
    }
}

impl PiperTtsClientConfig {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

pub struct PiperTtsClient {
    config: PiperTtsClientConfig,
}

impl PiperTtsClient {
    pub fn new(config: PiperTtsClientConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(PiperTtsClientConfig::default())
    }
}

/// piper 按行切分语句，整段文本合并为一行
fn prepare_input(text: &str) -> String {
    let mut line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    line.push('\n');
    line
}

#[async_trait]
impl TtsEnginePort for PiperTtsClient {
    async fn infer(&self, request: InferRequest) -> Result<Vec<u8>, TtsError> {
        let output = tempfile::Builder::new()
            .prefix("voicebridge-")
            .suffix(".wav")
            .tempfile()?;

        tracing::debug!(
            binary = %self.config.binary.display(),
            model = %request.model_path.display(),
            voice = %request.voice,
            text_len = request.text.len(),
            "Spawning piper"
        );

        let mut child = Command::new(&self.config.binary)
            .arg("--model")
            .arg(&request.model_path)
            .arg("--output_file")
            .arg(output.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                TtsError::SpawnError(format!("{}: {}", self.config.binary.display(), e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(prepare_input(&request.text).as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let result = child.wait_with_output().await?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(TtsError::EngineError(format!(
                "piper exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        let audio = tokio::fs::read(output.path()).await?;
        if audio.is_empty() {
            return Err(TtsError::InvalidOutput("piper produced no audio".to_string()));
        }

        tracing::debug!(voice = %request.voice, audio_size = audio.len(), "piper finished");
        Ok(audio)
    }

    fn name(&self) -> &'static str {
        "piper"
    }
}
