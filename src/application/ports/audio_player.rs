//! Audio Player Port - 本机音频播放抽象
//!
//! 播放器探测与调用的接口，系统实现在 infrastructure/adapters/playback

use async_trait::async_trait;
use serde::Serialize;
use std::ffi::OsString;
use std::path::Path;
use thiserror::Error;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Failed to start {program}: {message}")]
    SpawnError { program: String, message: String },

    #[error("{0}")]
    PlayerFailed(String),

    #[error("Playback timed out")]
    Timeout,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for PlaybackError {
    fn from(err: std::io::Error) -> Self {
        PlaybackError::IoError(err.to_string())
    }
}

/// 已知的系统播放器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioBackend {
    Paplay,
    Aplay,
    Sox,
    Ffplay,
    Afplay,
}

impl AudioBackend {
    /// 自动探测时的优先级顺序
    pub const PREFERENCE: [AudioBackend; 5] = [
        AudioBackend::Paplay,
        AudioBackend::Aplay,
        AudioBackend::Sox,
        AudioBackend::Ffplay,
        AudioBackend::Afplay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paplay => "paplay",
            Self::Aplay => "aplay",
            Self::Sox => "sox",
            Self::Ffplay => "ffplay",
            Self::Afplay => "afplay",
        }
    }

    /// 实际执行的程序名（sox 通过 `play` 播放）
    pub fn program(&self) -> &'static str {
        match self {
            Self::Sox => "play",
            other => other.as_str(),
        }
    }

    /// 播放 `path` 的完整参数
    pub fn args(&self, path: &Path) -> Vec<OsString> {
        let flags: &[&str] = match self {
            Self::Paplay | Self::Afplay => &[],
            Self::Aplay | Self::Sox => &["-q"],
            Self::Ffplay => &["-nodisp", "-autoexit", "-loglevel", "quiet"],
        };
        flags
            .iter()
            .map(OsString::from)
            .chain(std::iter::once(path.as_os_str().to_owned()))
            .collect()
    }
}

impl std::fmt::Display for AudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AudioBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paplay" => Ok(Self::Paplay),
            "aplay" => Ok(Self::Aplay),
            "sox" | "play" => Ok(Self::Sox),
            "ffplay" => Ok(Self::Ffplay),
            "afplay" => Ok(Self::Afplay),
            _ => Err(format!("unknown audio backend: {}", s)),
        }
    }
}

/// 播放器选择策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendPreference {
    /// 按 `AudioBackend::PREFERENCE` 顺序探测
    Auto,
    /// 固定使用某个播放器，不探测
    Fixed(AudioBackend),
}

impl std::str::FromStr for BackendPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

/// 播放器探测端口
#[async_trait]
pub trait BackendProbePort: Send + Sync {
    /// 程序是否已安装在本机
    async fn is_installed(&self, program: &str) -> bool;
}

/// 播放端口
#[async_trait]
pub trait AudioPlayerPort: Send + Sync {
    /// 使用指定播放器播放 WAV 数据，播放结束后返回
    async fn play(&self, backend: AudioBackend, wav: &[u8]) -> Result<(), PlaybackError>;
}
