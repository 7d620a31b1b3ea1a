//! Voice Registry - 音色注册表
//!
//! 启动时扫描一次内置清单，只收录模型文件存在的音色；之后只读。
//! 缺失的模型不会导致启动失败，请求该音色时返回 `UnknownVoice`。

use std::collections::BTreeMap;
use std::path::Path;

use super::catalog::VOICE_CATALOG;
use super::{VoiceDescriptor, VoiceError};

#[derive(Debug, Clone)]
pub struct VoiceRegistry {
    voices: BTreeMap<String, VoiceDescriptor>,
    default_voice: String,
}

impl VoiceRegistry {
    /// 扫描 `voice_dir`，按内置清单加载可用音色
    pub async fn scan(voice_dir: &Path, default_voice: impl Into<String>) -> Self {
        let mut voices = BTreeMap::new();

        for entry in VOICE_CATALOG {
            let descriptor = entry.descriptor(voice_dir);
            let present = tokio::fs::try_exists(descriptor.model_path())
                .await
                .unwrap_or(false);

            if present {
                tracing::info!(
                    voice = entry.name,
                    model = %descriptor.model_path().display(),
                    "Voice model found"
                );
                voices.insert(entry.name.to_string(), descriptor);
            } else {
                tracing::warn!(
                    voice = entry.name,
                    model = %descriptor.model_path().display(),
                    "Voice model not found, download it with: ./install.sh download-voice {}",
                    entry.name
                );
            }
        }

        let registry = Self {
            voices,
            default_voice: default_voice.into(),
        };

        if registry.is_empty() {
            tracing::error!("No voice models loaded! Run: ./install.sh download-voice amy");
        } else {
            tracing::info!(
                count = registry.len(),
                voices = %registry.names().join(", "),
                "Voice registry ready"
            );
        }
        if !registry.voices.contains_key(&registry.default_voice) {
            tracing::warn!(
                default_voice = %registry.default_voice,
                "Default voice model is missing; requests without an explicit voice will fail"
            );
        }

        registry
    }

    /// 由现成的音色构造（测试与嵌入式使用）
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = VoiceDescriptor>,
        default_voice: impl Into<String>,
    ) -> Self {
        Self {
            voices: descriptors
                .into_iter()
                .map(|d| (d.name().to_string(), d))
                .collect(),
            default_voice: default_voice.into(),
        }
    }

    /// 解析音色
    ///
    /// 未指定（或为空串）时回退到默认音色。
    pub fn resolve(&self, name: Option<&str>) -> Result<&VoiceDescriptor, VoiceError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.default_voice);

        self.voices
            .get(name)
            .ok_or_else(|| VoiceError::UnknownVoice {
                name: name.to_string(),
                available: self.names(),
            })
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    pub fn names(&self) -> Vec<String> {
        self.voices.keys().cloned().collect()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &VoiceDescriptor> {
        self.voices.values()
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
