use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionOptions};
use crate::domain::{ResolvedAudio, Utterance};

/// Returns a fixed set of utterances regardless of the audio.
pub struct MockTranscriptionEngine {
    utterances: Vec<Utterance>,
}

impl MockTranscriptionEngine {
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self { utterances }
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new(vec![
            Utterance::new("A", "Hi, I'm calling to ask about your plans."),
            Utterance::new("B", "Sure! I'd be happy to help you with that."),
        ])
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio: &ResolvedAudio,
        _options: TranscriptionOptions,
    ) -> Result<Vec<Utterance>, TranscriptionError> {
        Ok(self.utterances.clone())
    }
}
