use std::sync::Arc;

use crate::application::ports::{AudioFetcher, LlmClient, TranscriptionEngine};
use crate::application::services::CallAnalysisService;

pub struct AppState<F, E, L>
where
    F: AudioFetcher + ?Sized,
    E: TranscriptionEngine + ?Sized,
    L: LlmClient + ?Sized,
{
    pub call_analysis_service: Arc<CallAnalysisService<F, E, L>>,
}

impl<F, E, L> Clone for AppState<F, E, L>
where
    F: AudioFetcher + ?Sized,
    E: TranscriptionEngine + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            call_analysis_service: Arc::clone(&self.call_analysis_service),
        }
    }
}
