//! Client - 语音服务 HTTP 客户端

mod voice_client;

pub use voice_client::{
    ClientError, VoiceClient, VoiceClientConfig, DEFAULT_SERVER_URL, SERVER_URL_ENV,
};
