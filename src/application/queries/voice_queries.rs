//! Voice Queries

/// 列出所有已加载音色
#[derive(Debug, Clone)]
pub struct ListVoices;
