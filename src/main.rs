//! Voicebridge - 本机语音播报服务
//!
//! 启动流程：配置 -> 日志 -> 音色扫描 -> 引擎/播放器装配 -> HTTP 服务

use std::sync::Arc;

use voicebridge::application::{BackendProbePort, BackendSelector, Synthesizer, SynthesizerConfig};
use voicebridge::config::{load_config, print_config};
use voicebridge::domain::VoiceRegistry;
use voicebridge::infrastructure::adapters::{
    PathProbe, PiperTtsClient, PiperTtsClientConfig, SystemAudioPlayer,
};
use voicebridge::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voicebridge={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Ruler Voice Bridge");
    print_config(&config);

    // 确保模型目录存在
    tokio::fs::create_dir_all(&config.voice_dir).await?;

    let registry = Arc::new(VoiceRegistry::scan(&config.voice_dir, &config.default_voice).await);

    // 合成引擎
    let probe = Arc::new(PathProbe::from_env());
    if !probe.is_installed(&config.piper_binary).await {
        tracing::warn!(
            binary = %config.piper_binary,
            "Piper binary not found, synthesis requests will fail until it is installed"
        );
    }
    let engine = Arc::new(PiperTtsClient::new(PiperTtsClientConfig::new(
        &config.piper_binary,
    )));
    let synthesizer = Arc::new(Synthesizer::new(
        engine,
        SynthesizerConfig {
            timeout: config.synthesis_timeout(),
            silence_padding: config.silence_padding,
        },
    ));

    // 播放器
    let preference = config
        .backend_preference()
        .map_err(|e| anyhow::anyhow!("Invalid audio backend: {}", e))?;
    let selector = Arc::new(BackendSelector::new(
        preference,
        probe,
        Arc::new(SystemAudioPlayer::new(config.playback_timeout())),
    ));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.host, config.port);
    let state = AppState::new(registry, synthesizer, selector);
    let server = HttpServer::new(server_config, state);

    tracing::info!("API available at {}", config.public_base_url());

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
