//! System Audio Player - 通过系统播放器播放 WAV
//!
//! 音频先写入临时 `.wav` 文件，再以播放器的静默参数执行，等待播放结束。

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::application::ports::{AudioBackend, AudioPlayerPort, PlaybackError};

pub struct SystemAudioPlayer {
    timeout: Duration,
}

impl SystemAudioPlayer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemAudioPlayer {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl AudioPlayerPort for SystemAudioPlayer {
    async fn play(&self, backend: AudioBackend, wav: &[u8]) -> Result<(), PlaybackError> {
        let file = tempfile::Builder::new()
            .prefix("voicebridge-play-")
            .suffix(".wav")
            .tempfile()?;
        tokio::fs::write(file.path(), wav).await?;

        let child = Command::new(backend.program())
            .args(backend.args(file.path()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PlaybackError::SpawnError {
                program: backend.program().to_string(),
                message: e.to_string(),
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| PlaybackError::Timeout)??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("{} exited with {}", backend.program(), output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(PlaybackError::PlayerFailed(message));
        }

        Ok(())
    }
}
