//! Playback Adapter - 播放器探测与系统播放

mod path_probe;
mod system_player;

pub use path_probe::PathProbe;
pub use system_player::SystemAudioPlayer;
