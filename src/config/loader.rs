//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（JSON，`RULER_VOICE_CONFIG` 或 config.json）
//! 3. 默认值

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::{default_voice_dir, expand_home, AppConfig, ConfigSource};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "RULER_VOICE_CONFIG";
/// 默认配置文件
const DEFAULT_CONFIG_FILE: &str = "config.json";
/// 环境变量前缀
const ENV_PREFIX: &str = "RULER_VOICE";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `RULER_VOICE_`，层级分隔符 `__`）
/// 2. 配置文件（JSON）
/// 3. 默认值
///
/// # 环境变量示例
/// - `RULER_VOICE_PORT=9010`
/// - `RULER_VOICE_DEFAULT=ryan`（等同 `RULER_VOICE_DEFAULT_VOICE`）
/// - `RULER_VOICE_DIR=/opt/piper/voices`（等同 `RULER_VOICE_VOICE_DIR`）
/// - `RULER_VOICE_AUDIO_BACKEND=aplay`
/// - `RULER_VOICE_LOG__LEVEL=debug`
///
/// 配置文件无法解析时记录警告并忽略，不会阻止启动。
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    load_config_from_path(Some(Path::new(&path)))
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，文件不存在时视为未配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = config_path.filter(|p| p.is_file()).map(Path::to_path_buf);

    let (mut app_config, source) = match &file {
        Some(path) => match layered(Some(path)).and_then(build) {
            Ok(config) => (config, ConfigSource::File(path.clone())),
            Err(e) => {
                // 文件损坏或字段类型错误时回退到 默认值 + 环境变量
                (
                    build(layered(None)?)?,
                    ConfigSource::Ignored {
                        path: path.clone(),
                        reason: e.to_string(),
                    },
                )
            }
        },
        None => (build(layered(None)?)?, ConfigSource::Defaults),
    };

    app_config.voice_dir = expand_home(&app_config.voice_dir);
    app_config.source = source;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 合并并反序列化
fn build(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    builder.build()?.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })
}

/// 默认值 -> 配置文件 -> 环境变量
fn layered(file: Option<&PathBuf>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 9003)?
        .set_default("default_voice", "amy")?
        .set_default("voice_dir", default_voice_dir().to_string_lossy().to_string())?
        .set_default("audio_backend", "auto")?
        .set_default("silence_padding", 0.2)?
        .set_default("synthesis_timeout_secs", 30)?
        .set_default("playback_timeout_secs", 30)?
        .set_default("piper_binary", "piper")?
        .set_default("log.level", "info")?;

    if let Some(path) = file {
        builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Json));
    }

    // 注意: 环境变量名会被转换为小写
    builder = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        // 简写形式
        .set_override_option(
            "default_voice",
            env_value(&format!("{}_DEFAULT", ENV_PREFIX)),
        )?
        .set_override_option("voice_dir", env_value(&format!("{}_DIR", ENV_PREFIX)))?;

    Ok(builder)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// 验证配置有效性
pub(crate) fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.default_voice.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Default voice cannot be empty".to_string(),
        ));
    }

    if !(config.silence_padding.is_finite() && config.silence_padding >= 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "Silence padding must be a non-negative number of seconds, got {}",
            config.silence_padding
        )));
    }

    if config.synthesis_timeout_secs == 0 || config.playback_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Timeouts cannot be 0".to_string(),
        ));
    }

    if config.piper_binary.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Piper binary cannot be empty".to_string(),
        ));
    }

    config
        .backend_preference()
        .map_err(ConfigError::ValidationError)?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    match &config.source {
        ConfigSource::Defaults => tracing::info!("Config File: none, using defaults"),
        ConfigSource::File(path) => tracing::info!("Config File: {}", path.display()),
        ConfigSource::Ignored { path, reason } => tracing::warn!(
            "Failed to load config file {}: {}, using defaults",
            path.display(),
            reason
        ),
    }
    tracing::info!("Server: {}:{}", config.host, config.port);
    tracing::info!("Public Base URL: {}", config.public_base_url());
    tracing::info!("Default Voice: {}", config.default_voice);
    tracing::info!("Voice Directory: {}", config.voice_dir.display());
    tracing::info!("Audio Backend: {}", config.audio_backend);
    tracing::info!("Silence Padding: {}s", config.silence_padding);
    tracing::info!("Synthesis Timeout: {}s", config.synthesis_timeout_secs);
    tracing::info!("Piper Binary: {}", config.piper_binary);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config_from_path(Some(Path::new("/nonexistent/voice.json"))).unwrap();
        assert_eq!(config.source, ConfigSource::Defaults);
        assert_eq!(config.audio_backend, "auto");
        assert_eq!(config.piper_binary, "piper");
    }

    #[test]
    fn test_file_values_are_loaded() {
        let file = write_config(
            r#"{"audio_backend": "aplay", "silence_padding": 0.5, "log": {"level": "debug"}}"#,
        );
        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.source, ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(config.audio_backend, "aplay");
        assert_eq!(config.silence_padding, 0.5);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.synthesis_timeout_secs, 30);
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let file = write_config("{ this is not json");
        let config = load_config_from_path(Some(file.path())).unwrap();
        assert!(matches!(config.source, ConfigSource::Ignored { .. }));
        assert_eq!(config.silence_padding, 0.2);
    }

    #[test]
    fn test_mistyped_file_value_is_ignored() {
        let file = write_config(r#"{"port": "abc", "audio_backend": "aplay"}"#);
        let config = load_config_from_path(Some(file.path())).unwrap();
        match &config.source {
            ConfigSource::Ignored { path, .. } => assert_eq!(path, file.path()),
            other => panic!("expected ignored config file, got {:?}", other),
        }
        assert_eq!(config.port, 9003);
        assert_eq!(config.audio_backend, "auto");
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let file = write_config(r#"{"audio_backend": "winamp"}"#);
        assert!(matches!(
            load_config_from_path(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_default_voice() {
        let mut config = AppConfig::default();
        config.default_voice = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_negative_padding() {
        let mut config = AppConfig::default();
        config.silence_padding = -0.1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.synthesis_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}
