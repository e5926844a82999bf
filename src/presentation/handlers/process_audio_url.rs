use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::application::ports::{AudioFetcher, LlmClient, TranscriptionEngine};
use crate::application::services::CallAnalysisResponse;
use crate::presentation::handlers::error_response::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

#[tracing::instrument(skip(state))]
pub async fn process_audio_url_handler<F, E, L>(
    State(state): State<AppState<F, E, L>>,
    Json(body): Json<UrlRequest>,
) -> Result<Json<CallAnalysisResponse>, ApiError>
where
    F: AudioFetcher + ?Sized + 'static,
    E: TranscriptionEngine + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let response = state
        .call_analysis_service
        .analyze_request(None, Some(body.url))
        .await?;

    Ok(Json(response))
}
