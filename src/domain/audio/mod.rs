//! Audio - 音频负载与 WAV 容器处理

mod payload;
pub mod wav;

pub use payload::AudioPayload;
pub use wav::{AudioInfo, WavError};
