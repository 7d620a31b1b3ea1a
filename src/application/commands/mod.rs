//! 应用层 - 命令
//!
//! CQRS 命令侧：合成、播放、播放器缓存重置

mod backend_commands;
mod speech_commands;

pub mod handlers;

pub use backend_commands::*;
pub use speech_commands::*;
