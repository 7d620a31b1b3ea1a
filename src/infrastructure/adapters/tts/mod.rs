//! TTS Adapter - 语音合成引擎实现

mod fake_tts_client;
mod piper_tts_client;

pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use piper_tts_client::{PiperTtsClient, PiperTtsClientConfig};
