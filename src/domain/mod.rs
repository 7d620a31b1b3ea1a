//! Domain Layer - 领域层
//!
//! - Voice Context: 音色清单与注册表
//! - Audio: 合成音频负载与 WAV 处理

pub mod audio;
pub mod voice;

pub use audio::{AudioInfo, AudioPayload, WavError};
pub use voice::{Quality, Speed, VoiceDescriptor, VoiceError, VoiceRegistry};
