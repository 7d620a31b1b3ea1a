//! Configuration Types
//!
//! 定义配置结构体

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::ports::BackendPreference;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 未指定音色时使用的音色
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// 模型目录
    #[serde(default = "default_voice_dir")]
    pub voice_dir: PathBuf,

    /// 播放器：`auto` 或固定的播放器名
    #[serde(default = "default_audio_backend")]
    pub audio_backend: String,

    /// 语音前插入的静音（秒）
    #[serde(default = "default_silence_padding")]
    pub silence_padding: f32,

    /// 单次合成超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub synthesis_timeout_secs: u64,

    /// 单次播放超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub playback_timeout_secs: u64,

    /// piper 可执行文件
    #[serde(default = "default_piper_binary")]
    pub piper_binary: String,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 配置来源（加载时填写）
    #[serde(skip)]
    pub source: ConfigSource,
}

/// 配置文件的加载情况
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// 没有配置文件，仅默认值与环境变量
    #[default]
    Defaults,
    /// 已加载配置文件
    File(PathBuf),
    /// 配置文件无法解析，已忽略
    Ignored { path: PathBuf, reason: String },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_voice: default_voice(),
            voice_dir: default_voice_dir(),
            audio_backend: default_audio_backend(),
            silence_padding: default_silence_padding(),
            synthesis_timeout_secs: default_timeout_secs(),
            playback_timeout_secs: default_timeout_secs(),
            piper_binary: default_piper_binary(),
            log: LogConfig::default(),
            source: ConfigSource::default(),
        }
    }
}

impl AppConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 本机访问地址
    pub fn public_base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }

    /// 解析播放器配置
    pub fn backend_preference(&self) -> Result<BackendPreference, String> {
        self.audio_backend.parse()
    }

    pub fn synthesis_timeout(&self) -> Duration {
        Duration::from_secs(self.synthesis_timeout_secs)
    }

    pub fn playback_timeout(&self) -> Duration {
        Duration::from_secs(self.playback_timeout_secs)
    }
}

/// 展开开头的 `~`
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9003
}

fn default_voice() -> String {
    "amy".to_string()
}

pub(crate) fn default_voice_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".piper")
        .join("voices")
}

fn default_audio_backend() -> String {
    "auto".to_string()
}

fn default_silence_padding() -> f32 {
    0.2
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_piper_binary() -> String {
    "piper".to_string()
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（`RUST_LOG` 优先）
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AudioBackend;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9003);
        assert_eq!(config.default_voice, "amy");
        assert!(config.voice_dir.ends_with(".piper/voices"));
        assert_eq!(config.silence_padding, 0.2);
        assert_eq!(config.synthesis_timeout(), Duration::from_secs(30));
        assert_eq!(config.source, ConfigSource::Defaults);
    }

    #[test]
    fn test_addr_and_public_url() {
        let mut config = AppConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:9003");
        assert_eq!(config.public_base_url(), "http://localhost:9003");

        config.host = "127.0.0.1".to_string();
        assert_eq!(config.public_base_url(), "http://127.0.0.1:9003");
    }

    #[test]
    fn test_backend_preference() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_preference(), Ok(BackendPreference::Auto));

        config.audio_backend = "aplay".to_string();
        assert_eq!(
            config.backend_preference(),
            Ok(BackendPreference::Fixed(AudioBackend::Aplay))
        );

        config.audio_backend = "winamp".to_string();
        assert!(config.backend_preference().is_err());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/opt/voices")), PathBuf::from("/opt/voices"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/voices")), home.join("voices"));
        }
    }
}
