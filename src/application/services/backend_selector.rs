//! Backend Selector - 播放器选择
//!
//! 按优先级探测本机播放器，首个成功的探测结果在进程内缓存。
//! 并发的首批请求共享同一次探测；"没有播放器" 也只缓存为缺席，
//! 调用 `reset` 后重新探测。

use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioBackend, AudioPlayerPort, BackendPreference, BackendProbePort,
};
use crate::domain::AudioPayload;

type ProbeCell = Arc<OnceCell<Option<AudioBackend>>>;

pub struct BackendSelector {
    preference: BackendPreference,
    probe: Arc<dyn BackendProbePort>,
    player: Arc<dyn AudioPlayerPort>,
    cached: RwLock<ProbeCell>,
}

impl BackendSelector {
    pub fn new(
        preference: BackendPreference,
        probe: Arc<dyn BackendProbePort>,
        player: Arc<dyn AudioPlayerPort>,
    ) -> Self {
        Self {
            preference,
            probe,
            player,
            cached: RwLock::new(Arc::new(OnceCell::new())),
        }
    }

    pub fn preference(&self) -> BackendPreference {
        self.preference
    }

    /// 当前可用的播放器
    pub async fn available_backend(&self) -> Option<AudioBackend> {
        if let BackendPreference::Fixed(backend) = self.preference {
            return Some(backend);
        }

        // 只在读锁下取出 cell，探测期间不持锁，reset 不会被探测阻塞
        let cell = self.cached.read().await.clone();
        let backend = *cell.get_or_init(|| self.probe_backends()).await;
        backend
    }

    /// 丢弃缓存的探测结果，下次调用时重新探测
    pub async fn reset(&self) {
        *self.cached.write().await = Arc::new(OnceCell::new());
        tracing::info!("Audio backend cache cleared");
    }

    /// 使用 `backend` 播放音频
    pub async fn play(
        &self,
        payload: &AudioPayload,
        backend: AudioBackend,
    ) -> Result<(), ApplicationError> {
        tracing::debug!(
            backend = %backend,
            audio_size = payload.len(),
            duration_ms = payload.duration_ms(),
            "Playing audio"
        );
        self.player.play(backend, payload.as_bytes()).await.map_err(|e| {
            tracing::error!(backend = %backend, error = %e, "Playback failed");
            ApplicationError::from(e)
        })
    }

    async fn probe_backends(&self) -> Option<AudioBackend> {
        for backend in AudioBackend::PREFERENCE {
            if self.probe.is_installed(backend.program()).await {
                tracing::info!(backend = %backend, "Using audio backend");
                return Some(backend);
            }
        }

        tracing::warn!(
            "No audio player found! Install pulseaudio-utils, alsa-utils, sox, or ffmpeg"
        );
        None
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::ports::PlaybackError;
    use crate::domain::AudioInfo;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// 以固定集合模拟已安装程序，并统计探测次数
    pub(crate) struct StubProbe {
        installed: Mutex<HashSet<String>>,
        pub probes: AtomicUsize,
    }

    impl StubProbe {
        pub(crate) fn new(installed: &[&str]) -> Self {
            Self {
                installed: Mutex::new(installed.iter().map(|s| s.to_string()).collect()),
                probes: AtomicUsize::new(0),
            }
        }

        pub(crate) fn install(&self, program: &str) {
            self.installed.lock().unwrap().insert(program.to_string());
        }
    }

    #[async_trait]
    impl BackendProbePort for StubProbe {
        async fn is_installed(&self, program: &str) -> bool {
            self.probes.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.installed.lock().unwrap().contains(program)
        }
    }

    /// 记录播放请求的播放器
    #[derive(Default)]
    pub(crate) struct RecordingPlayer {
        pub played: Mutex<Vec<(AudioBackend, usize)>>,
        pub fail_with: Option<String>,
    }

    #[async_trait]
    impl AudioPlayerPort for RecordingPlayer {
        async fn play(&self, backend: AudioBackend, wav: &[u8]) -> Result<(), PlaybackError> {
            if let Some(message) = &self.fail_with {
                return Err(PlaybackError::PlayerFailed(message.clone()));
            }
            self.played.lock().unwrap().push((backend, wav.len()));
            Ok(())
        }
    }

    fn selector(
        preference: BackendPreference,
        probe: Arc<StubProbe>,
        player: Arc<RecordingPlayer>,
    ) -> BackendSelector {
        BackendSelector::new(preference, probe, player)
    }

    fn payload() -> AudioPayload {
        AudioPayload::new(
            vec![0u8; 64],
            AudioInfo {
                sample_rate: 22050,
                channels: 1,
                duration_ms: 1,
            },
        )
    }

    #[tokio::test]
    async fn test_probe_follows_preference_order() {
        let probe = Arc::new(StubProbe::new(&["ffplay", "aplay"]));
        let sel = selector(BackendPreference::Auto, probe, Arc::default());
        assert_eq!(sel.available_backend().await, Some(AudioBackend::Aplay));
    }

    #[tokio::test]
    async fn test_sox_is_probed_by_play_program() {
        let probe = Arc::new(StubProbe::new(&["play"]));
        let sel = selector(BackendPreference::Auto, probe, Arc::default());
        assert_eq!(sel.available_backend().await, Some(AudioBackend::Sox));
    }

    #[tokio::test]
    async fn test_probe_result_is_cached() {
        let probe = Arc::new(StubProbe::new(&["paplay"]));
        let sel = selector(BackendPreference::Auto, probe.clone(), Arc::default());

        assert_eq!(sel.available_backend().await, Some(AudioBackend::Paplay));
        assert_eq!(sel.available_backend().await, Some(AudioBackend::Paplay));
        assert_eq!(probe.probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_requests_probe_once() {
        let probe = Arc::new(StubProbe::new(&["afplay"]));
        let sel = Arc::new(selector(BackendPreference::Auto, probe.clone(), Arc::default()));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let sel = sel.clone();
                tokio::spawn(async move { sel.available_backend().await })
            })
            .collect();

        for result in futures_util::future::join_all(tasks).await {
            assert_eq!(result.unwrap(), Some(AudioBackend::Afplay));
        }
        // 一次完整探测：按优先级依次检查 5 个程序
        assert_eq!(probe.probes.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_absence_is_cached_until_reset() {
        let probe = Arc::new(StubProbe::new(&[]));
        let sel = selector(BackendPreference::Auto, probe.clone(), Arc::default());

        assert_eq!(sel.available_backend().await, None);
        probe.install("aplay");
        assert_eq!(sel.available_backend().await, None);

        sel.reset().await;
        assert_eq!(sel.available_backend().await, Some(AudioBackend::Aplay));
    }

    #[tokio::test]
    async fn test_fixed_backend_skips_probe() {
        let probe = Arc::new(StubProbe::new(&[]));
        let sel = selector(
            BackendPreference::Fixed(AudioBackend::Ffplay),
            probe.clone(),
            Arc::default(),
        );
        assert_eq!(sel.available_backend().await, Some(AudioBackend::Ffplay));
        assert_eq!(probe.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_play_hands_payload_to_player() {
        let player = Arc::new(RecordingPlayer::default());
        let sel = selector(
            BackendPreference::Auto,
            Arc::new(StubProbe::new(&["aplay"])),
            player.clone(),
        );

        sel.play(&payload(), AudioBackend::Aplay).await.unwrap();
        assert_eq!(*player.played.lock().unwrap(), vec![(AudioBackend::Aplay, 64)]);
    }

    #[tokio::test]
    async fn test_player_failure_maps_to_playback_failed() {
        let player = Arc::new(RecordingPlayer {
            fail_with: Some("device busy".to_string()),
            ..Default::default()
        });
        let sel = selector(BackendPreference::Auto, Arc::new(StubProbe::new(&[])), player);

        let err = sel.play(&payload(), AudioBackend::Paplay).await.unwrap_err();
        assert_eq!(err.kind(), "PlaybackFailed");
        assert!(err.to_string().contains("device busy"));
    }
}
