//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、播放器探测与播放）
//! - services: 合成适配、播放器选择
//! - commands: CQRS 命令及处理器（Speak、Play、ResetBackend）
//! - queries: CQRS 查询及处理器（状态、音色列表）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

// Re-exports
pub use commands::{
    handlers::{PlayHandler, ResetBackendHandler, SpeakHandler},
    PlayCommand, PlayResponse, ResetBackendCommand, ResetBackendResponse, SpeakCommand,
    SpeakResponse,
};

pub use error::ApplicationError;

pub use ports::{
    AudioBackend, AudioPlayerPort, BackendPreference, BackendProbePort, InferRequest,
    PlaybackError, TtsEnginePort, TtsError,
};

pub use queries::{
    handlers::{GetStatusHandler, ListVoicesHandler, StatusResponse, VoiceSummary},
    GetStatus, ListVoices,
};

pub use services::{BackendSelector, Synthesizer, SynthesizerConfig};
