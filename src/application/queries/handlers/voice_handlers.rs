//! Voice Query Handlers

use std::sync::Arc;

use crate::application::queries::ListVoices;
use crate::domain::{Quality, Speed, VoiceDescriptor, VoiceRegistry};

/// 音色摘要
#[derive(Debug, Clone)]
pub struct VoiceSummary {
    pub name: String,
    pub quality: Quality,
    pub speed: Speed,
    pub description: String,
    pub is_default: bool,
}

impl VoiceSummary {
    fn from_descriptor(descriptor: &VoiceDescriptor, default_voice: &str) -> Self {
        Self {
            name: descriptor.name().to_string(),
            quality: descriptor.quality(),
            speed: descriptor.speed(),
            description: descriptor.description().to_string(),
            is_default: descriptor.name() == default_voice,
        }
    }
}

/// ListVoices Handler
pub struct ListVoicesHandler {
    registry: Arc<VoiceRegistry>,
}

impl ListVoicesHandler {
    pub fn new(registry: Arc<VoiceRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, _query: ListVoices) -> Vec<VoiceSummary> {
        let default_voice = self.registry.default_voice();
        self.registry
            .descriptors()
            .map(|d| VoiceSummary::from_descriptor(d, default_voice))
            .collect()
    }
}
