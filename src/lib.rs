//! Voicebridge - 本机语音播报服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice: 音色清单、注册表
//! - Audio: WAV 处理、音频载荷
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, BackendProbe, AudioPlayer）
//! - Services: 合成适配、播放器选择
//! - Commands: Speak / Play / ResetBackend
//! - Queries: 状态、音色列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 服务端
//! - Client: say 命令行使用的 HTTP 客户端
//! - Adapters: Piper 引擎、系统播放器、PATH 探测

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
