//! Audio Payload - 单次合成产出的音频

use super::wav::AudioInfo;

/// 合成得到的 WAV 音频
///
/// 只属于产生它的那次请求，不缓存、不跨请求共享。
#[derive(Debug, Clone)]
pub struct AudioPayload {
    data: Vec<u8>,
    info: AudioInfo,
}

impl AudioPayload {
    pub const CONTENT_TYPE: &'static str = "audio/wav";

    pub fn new(data: Vec<u8>, info: AudioInfo) -> Self {
        Self { data, info }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn info(&self) -> &AudioInfo {
        &self.info
    }

    pub fn duration_ms(&self) -> u64 {
        self.info.duration_ms
    }
}
