use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionOptions};
use crate::domain::{ResolvedAudio, Transcript};

use super::call_analysis_error::CallAnalysisError;

/// Requests a diarized transcription and rejects empty results.
pub struct TranscriptionService<E>
where
    E: TranscriptionEngine + ?Sized,
{
    engine: Arc<E>,
}

impl<E> TranscriptionService<E>
where
    E: TranscriptionEngine + ?Sized,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    pub async fn transcribe(&self, audio: &ResolvedAudio) -> Result<Transcript, CallAnalysisError> {
        let options = TranscriptionOptions {
            speaker_labels: true,
        };

        let utterances = self
            .engine
            .transcribe(audio, options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Transcription provider failed");
                CallAnalysisError::TranscriptionFailed {
                    reason: e.to_string(),
                }
            })?;

        if utterances.is_empty() {
            return Err(CallAnalysisError::TranscriptionFailed {
                reason: "provider returned no utterances".to_string(),
            });
        }

        let transcript = Transcript::new(utterances);
        tracing::info!(
            utterances = transcript.len(),
            bytes = audio.byte_size(),
            "Transcription completed"
        );
        Ok(transcript)
    }
}
