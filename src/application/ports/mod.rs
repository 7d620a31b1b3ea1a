//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_player;
mod tts_engine;

pub use audio_player::{
    AudioBackend, AudioPlayerPort, BackendPreference, BackendProbePort, PlaybackError,
};
pub use tts_engine::{InferRequest, TtsEnginePort, TtsError};
