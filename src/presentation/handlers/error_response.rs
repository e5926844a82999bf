use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::CallAnalysisError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP rendering of a [`CallAnalysisError`].
#[derive(Debug)]
pub struct ApiError(pub CallAnalysisError);

impl From<CallAnalysisError> for ApiError {
    fn from(error: CallAnalysisError) -> Self {
        Self(error)
    }
}

pub fn status_for(error: &CallAnalysisError) -> StatusCode {
    match error {
        CallAnalysisError::InvalidInput { .. }
        | CallAnalysisError::InvalidMediaType { .. }
        | CallAnalysisError::DownloadFailed { .. }
        | CallAnalysisError::FetchFailed { .. }
        | CallAnalysisError::EmptyDownload => StatusCode::BAD_REQUEST,
        CallAnalysisError::TranscriptionFailed { .. }
        | CallAnalysisError::AnalysisStageFailed { .. } => StatusCode::BAD_GATEWAY,
        CallAnalysisError::MissingVariable { .. } | CallAnalysisError::Workspace(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self.0, status = %status, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
