//! say - 命令行客户端
//!
//! `say "Deploy finished" [voice]`：把文本交给语音服务播放。
//! 服务地址取自 `RULER_VOICE_URL`，默认 `http://localhost:9003`。

use clap::Parser;

use crate::infrastructure::client::{
    ClientError, VoiceClient, VoiceClientConfig, DEFAULT_SERVER_URL,
};
use crate::infrastructure::http::dto::PlayAck;

#[derive(Debug, Clone, Parser)]
#[command(name = "say", about = "Speak text through the local voice server")]
pub struct SayArgs {
    /// 要朗读的文本
    pub text: String,

    /// 音色（默认使用服务端配置）
    pub voice: Option<String>,

    /// 语音服务地址
    #[arg(long, env = "RULER_VOICE_URL", default_value = DEFAULT_SERVER_URL)]
    pub url: String,

    /// 请求超时（秒）
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,
}

/// 请求服务端播放
pub async fn say(args: &SayArgs) -> Result<PlayAck, ClientError> {
    let client = VoiceClient::new(VoiceClientConfig::new(&args.url).with_timeout(args.timeout))?;
    client.play(&args.text, args.voice.as_deref()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_args() {
        let args = SayArgs::parse_from(["say", "Tests passed", "ryan", "--url", "http://host:1"]);
        assert_eq!(args.text, "Tests passed");
        assert_eq!(args.voice.as_deref(), Some("ryan"));
        assert_eq!(args.url, "http://host:1");
        assert_eq!(args.timeout, 60);
    }

    #[test]
    fn test_text_is_required() {
        assert!(SayArgs::try_parse_from(["say"]).is_err());
    }

    #[tokio::test]
    async fn test_empty_text_fails_without_server() {
        let args = SayArgs::parse_from(["say", "", "--url", "http://127.0.0.1:1"]);
        let err = say(&args).await.unwrap_err();
        assert!(err.to_string().to_lowercase().contains("empty"));
    }
}
