//! Application Services - 合成与播放器选择

mod backend_selector;
mod synthesizer;

pub use backend_selector::BackendSelector;
pub use synthesizer::{Synthesizer, SynthesizerConfig};

#[cfg(test)]
pub(crate) use backend_selector::tests::{RecordingPlayer, StubProbe};
