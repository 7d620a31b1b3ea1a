//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("Voice '{name}' not available. Choose from: [{}]", available.join(", "))]
    UnknownVoice {
        name: String,
        available: Vec<String>,
    },
}
