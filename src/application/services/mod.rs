mod analysis_pipeline;
mod audio_source_resolver;
mod call_analysis_error;
mod call_analysis_service;
mod prompt_catalog;
mod response_assembler;
mod transcription_service;
mod workspace;

pub use analysis_pipeline::{AnalysisPipeline, AnalysisStage};
pub use audio_source_resolver::AudioSourceResolver;
pub use call_analysis_error::CallAnalysisError;
pub use call_analysis_service::CallAnalysisService;
pub use prompt_catalog::{
    PromptCatalog, PromptCatalogError, STRUCTURED_DIALOGUE_VAR, TRANSCRIPT_VAR,
};
pub use response_assembler::CallAnalysisResponse;
pub use transcription_service::TranscriptionService;
pub use workspace::{ScopedWorkspace, WorkspaceError, WorkspaceFactory};
