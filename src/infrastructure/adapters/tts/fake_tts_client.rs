//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不调用真实引擎：把文本的每个字节编码为一个 PCM 样本，
//! 这样测试可以从返回的音频中还原出对应的文本。

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::{InferRequest, TtsEnginePort, TtsError};
use crate::domain::audio::wav;

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 输出采样率
    pub sample_rate: u32,
    /// 模拟推理延迟
    pub latency: Duration,
    /// 设置后每次推理都返回该错误
    pub failure: Option<String>,
    /// 设置后原样返回这些字节而不是 WAV
    pub raw_output: Option<Vec<u8>>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            latency: Duration::ZERO,
            failure: None,
            raw_output: None,
        }
    }
}

pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: AtomicUsize,
    last_model: Mutex<Option<PathBuf>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
            last_model: Mutex::new(None),
        }
    }

    /// 引擎被调用的次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最近一次调用使用的模型
    pub fn last_model(&self) -> Option<PathBuf> {
        self.last_model.lock().ok().and_then(|m| m.clone())
    }

    /// 从本客户端生成的音频中还原文本（跳过静音样本）
    pub fn decode_text(audio: &[u8]) -> Option<String> {
        let header = wav::parse_header(audio).ok()?;
        let data = &audio[header.data_start..header.data_start + header.data_size];
        let bytes: Vec<u8> = data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .filter(|&sample| sample != 0)
            .map(|sample| (sample / 64) as u8)
            .collect();
        String::from_utf8(bytes).ok()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn infer(&self, request: InferRequest) -> Result<Vec<u8>, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_model.lock() {
            *last = Some(request.model_path.clone());
        }

        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsClient: echoing text as audio"
        );

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        if let Some(message) = &self.config.failure {
            return Err(TtsError::EngineError(message.clone()));
        }
        if let Some(raw) = &self.config.raw_output {
            return Ok(raw.clone());
        }

        let samples: Vec<i16> = request.text.bytes().map(|b| b as i16 * 64).collect();
        Ok(wav::encode_pcm16(&samples, self.config.sample_rate, 1))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_round_trip() {
        let client = FakeTtsClient::new(FakeTtsClientConfig::default());
        let audio = client
            .infer(InferRequest {
                text: "Tests passed".to_string(),
                model_path: PathBuf::from("/v/amy.onnx"),
                voice: "amy".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(FakeTtsClient::decode_text(&audio).as_deref(), Some("Tests passed"));
        assert_eq!(client.calls(), 1);
        assert_eq!(client.last_model(), Some(PathBuf::from("/v/amy.onnx")));
    }
}
