//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 内置音色清单（名称、质量、速度、描述）
//! - 启动时按模型文件扫描出注册表
//! - 请求时解析音色

pub mod catalog;
mod descriptor;
mod errors;
mod registry;
mod value_objects;

pub use catalog::{CatalogEntry, VOICE_CATALOG};
pub use descriptor::VoiceDescriptor;
pub use errors::VoiceError;
pub use registry::VoiceRegistry;
pub use value_objects::{Quality, Speed};
