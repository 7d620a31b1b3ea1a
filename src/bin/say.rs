//! say - 把文本交给本机语音服务播放
//!
//! 成功时退出码为 0；网络或服务端错误时在 stderr 输出原因并返回非 0。

use std::process::ExitCode;

use clap::Parser;
use voicebridge::cli::{say, SayArgs};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = SayArgs::parse();

    match say(&args).await {
        Ok(ack) => {
            tracing::debug!(voice = %ack.voice, backend = ?ack.backend, "Played");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("say: {}", e);
            ExitCode::FAILURE
        }
    }
}
