use crate::domain::PromptTemplateError;

use super::workspace::WorkspaceError;

/// Every way an analysis request can fail. The HTTP layer decides how each
/// variant maps to a status code.
#[derive(Debug, thiserror::Error)]
pub enum CallAnalysisError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("unsupported media type: {content_type:?} is not an audio type")]
    InvalidMediaType { content_type: String },
    #[error("failed to fetch audio from url: HTTP {status}")]
    DownloadFailed { status: u16 },
    #[error("error downloading audio: {reason}")]
    FetchFailed { reason: String },
    #[error("downloaded audio is empty")]
    EmptyDownload,
    #[error("workspace: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("transcription failed: {reason}")]
    TranscriptionFailed { reason: String },
    #[error("prompt template is missing variable {name}")]
    MissingVariable { name: String },
    #[error("analysis stage {stage_index} ({stage}) failed: {reason}")]
    AnalysisStageFailed {
        stage_index: usize,
        stage: &'static str,
        reason: String,
    },
}

impl CallAnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<PromptTemplateError> for CallAnalysisError {
    fn from(error: PromptTemplateError) -> Self {
        match error {
            PromptTemplateError::MissingVariable { name }
            | PromptTemplateError::UnreferencedVariable { name } => Self::MissingVariable { name },
        }
    }
}
