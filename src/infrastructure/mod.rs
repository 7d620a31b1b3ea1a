//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及 HTTP 服务端与客户端

pub mod adapters;
pub mod client;
pub mod http;

pub use adapters::{FakeTtsClient, PathProbe, PiperTtsClient, SystemAudioPlayer};
pub use client::{VoiceClient, VoiceClientConfig};
pub use http::{AppState, HttpServer, ServerConfig};
