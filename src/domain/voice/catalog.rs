//! Voice Catalog - 内置的固定音色清单
//!
//! 清单在编译期确定，运行时只根据模型文件是否存在决定哪些音色可用。

use std::path::Path;

use super::{Quality, Speed, VoiceDescriptor};

/// 清单条目
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub locale: &'static str,
    pub quality: Quality,
    pub speed: Speed,
    pub description: &'static str,
}

impl CatalogEntry {
    /// Piper 模型文件名，如 `en_US-amy-medium.onnx`
    pub fn model_file_name(&self) -> String {
        format!("{}-{}-{}.onnx", self.locale, self.name, self.quality)
    }

    pub fn descriptor(&self, voice_dir: &Path) -> VoiceDescriptor {
        VoiceDescriptor::new(
            self.name,
            voice_dir.join(self.model_file_name()),
            self.quality,
            self.speed,
            self.description,
        )
    }
}

/// 支持的音色
pub const VOICE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "amy",
        locale: "en_US",
        quality: Quality::Medium,
        speed: Speed::Fast,
        description: "Natural female voice (medium quality)",
    },
    CatalogEntry {
        name: "danny",
        locale: "en_US",
        quality: Quality::Low,
        speed: Speed::VeryFast,
        description: "Clear male voice (low quality, fast)",
    },
    CatalogEntry {
        name: "kathleen",
        locale: "en_US",
        quality: Quality::Low,
        speed: Speed::VeryFast,
        description: "Professional female voice (low quality, fast)",
    },
    CatalogEntry {
        name: "libritts",
        locale: "en_US",
        quality: Quality::High,
        speed: Speed::Slow,
        description: "High quality voice (slower)",
    },
    CatalogEntry {
        name: "lessac",
        locale: "en_US",
        quality: Quality::Medium,
        speed: Speed::Fast,
        description: "Alternative voice (medium quality)",
    },
    CatalogEntry {
        name: "ryan",
        locale: "en_US",
        quality: Quality::Medium,
        speed: Speed::Fast,
        description: "Deep male voice (medium quality)",
    },
];

/// 按名称查找清单条目
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    VOICE_CATALOG.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_file_name() {
        let amy = lookup("amy").unwrap();
        assert_eq!(amy.model_file_name(), "en_US-amy-medium.onnx");
        assert_eq!(lookup("libritts").unwrap().model_file_name(), "en_US-libritts-high.onnx");
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = VOICE_CATALOG.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), VOICE_CATALOG.len());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("missingvoice").is_none());
    }
}
