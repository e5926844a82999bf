use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::assemblyai_engine::AssemblyAiEngine;
use super::mock_transcription_engine::MockTranscriptionEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptionProvider {
    AssemblyAi,
    Mock,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        poll_interval: Duration,
        max_polls: u32,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::AssemblyAi => {
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for AssemblyAI".to_string(),
                    )
                })?;
                let engine =
                    AssemblyAiEngine::new(key, base_url).with_polling(poll_interval, max_polls);
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Mock => Ok(Arc::new(MockTranscriptionEngine::default())),
        }
    }
}
