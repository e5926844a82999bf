use async_trait::async_trait;

use crate::domain::{ResolvedAudio, Utterance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptionOptions {
    pub speaker_labels: bool,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            speaker_labels: true,
        }
    }
}

/// Speech-to-text over a local audio file, returning utterances in spoken order.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &ResolvedAudio,
        options: TranscriptionOptions,
    ) -> Result<Vec<Utterance>, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio read failed: {0}")]
    AudioReadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription did not finish after {0} polls")]
    PollingExhausted(u32),
    #[error("engine configuration: {0}")]
    Configuration(String),
}
