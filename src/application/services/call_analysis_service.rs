use std::sync::Arc;

use crate::application::ports::{AudioFetcher, LlmClient, TranscriptionEngine};
use crate::domain::{AudioSource, AudioUpload};

use super::analysis_pipeline::AnalysisPipeline;
use super::audio_source_resolver::AudioSourceResolver;
use super::call_analysis_error::CallAnalysisError;
use super::response_assembler::CallAnalysisResponse;
use super::transcription_service::TranscriptionService;
use super::workspace::{ScopedWorkspace, WorkspaceFactory};

/// Resolve → transcribe → analyze, bracketed by one request workspace.
pub struct CallAnalysisService<F, E, L>
where
    F: AudioFetcher + ?Sized,
    E: TranscriptionEngine + ?Sized,
    L: LlmClient + ?Sized,
{
    workspaces: WorkspaceFactory,
    resolver: AudioSourceResolver<F>,
    transcription: TranscriptionService<E>,
    pipeline: AnalysisPipeline<L>,
}

impl<F, E, L> CallAnalysisService<F, E, L>
where
    F: AudioFetcher + ?Sized,
    E: TranscriptionEngine + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(
        workspaces: WorkspaceFactory,
        resolver: AudioSourceResolver<F>,
        transcription: TranscriptionService<E>,
        pipeline: AnalysisPipeline<L>,
    ) -> Self {
        Self {
            workspaces,
            resolver,
            transcription,
            pipeline,
        }
    }

    pub fn from_parts(
        workspaces: WorkspaceFactory,
        fetcher: Arc<F>,
        engine: Arc<E>,
        pipeline: AnalysisPipeline<L>,
    ) -> Self {
        Self::new(
            workspaces,
            AudioSourceResolver::new(fetcher),
            TranscriptionService::new(engine),
            pipeline,
        )
    }

    /// Entry point for callers holding optional request parts.
    pub async fn analyze_request(
        &self,
        upload: Option<AudioUpload>,
        url: Option<String>,
    ) -> Result<CallAnalysisResponse, CallAnalysisError> {
        let source = AudioSource::select(upload, url).ok_or_else(|| {
            CallAnalysisError::invalid_input("either an audio file or a URL must be provided")
        })?;
        self.analyze(source).await
    }

    /// Runs the whole request. The workspace is released exactly once, after
    /// the outcome is known, and its release never changes that outcome.
    pub async fn analyze(&self, source: AudioSource) -> Result<CallAnalysisResponse, CallAnalysisError> {
        tracing::info!(source = source.kind(), "Starting call analysis");

        let workspace = self.workspaces.acquire()?;
        let outcome = self.analyze_in(&workspace, source).await;
        workspace.release();

        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "Call analysis failed");
        }
        outcome
    }

    async fn analyze_in(
        &self,
        workspace: &ScopedWorkspace,
        source: AudioSource,
    ) -> Result<CallAnalysisResponse, CallAnalysisError> {
        let audio = self.resolver.resolve(source, workspace).await?;
        let transcript = self.transcription.transcribe(&audio).await?;
        let result = self.pipeline.run(&transcript.render()).await?;
        Ok(CallAnalysisResponse::from(result))
    }
}
