//! Voice Context - VoiceDescriptor

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{Quality, Speed};

/// 已加载的音色
///
/// 不变量:
/// - name 在注册表内唯一
/// - model_path 在启动扫描时存在
/// - 加载后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceDescriptor {
    name: String,
    model_path: PathBuf,
    quality: Quality,
    speed: Speed,
    description: String,
}

impl VoiceDescriptor {
    pub fn new(
        name: impl Into<String>,
        model_path: impl Into<PathBuf>,
        quality: Quality,
        speed: Speed,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model_path: model_path.into(),
            quality,
            speed,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
