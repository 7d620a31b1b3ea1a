//! Backend Commands - 播放器缓存管理

use crate::application::ports::AudioBackend;

/// 清除播放器探测缓存并重新探测
#[derive(Debug, Clone)]
pub struct ResetBackendCommand;

#[derive(Debug, Clone)]
pub struct ResetBackendResponse {
    pub audio_backend: Option<AudioBackend>,
}
