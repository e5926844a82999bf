use axum::Json;
use axum::extract::{Multipart, State};

use crate::application::ports::{AudioFetcher, LlmClient, TranscriptionEngine};
use crate::application::services::{CallAnalysisError, CallAnalysisResponse};
use crate::domain::AudioUpload;
use crate::presentation::handlers::error_response::ApiError;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";
const URL_FIELD: &str = "url";

/// Multipart form with an optional `file` part and an optional `url` field.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_audio_handler<F, E, L>(
    State(state): State<AppState<F, E, L>>,
    multipart: Multipart,
) -> Result<Json<CallAnalysisResponse>, ApiError>
where
    F: AudioFetcher + ?Sized + 'static,
    E: TranscriptionEngine + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let (upload, url) = read_form(multipart).await?;

    let response = state
        .call_analysis_service
        .analyze_request(upload, url)
        .await?;

    Ok(Json(response))
}

async fn read_form(
    mut multipart: Multipart,
) -> Result<(Option<AudioUpload>, Option<String>), CallAnalysisError> {
    let mut upload = None;
    let mut url = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        CallAnalysisError::invalid_input(format!("failed to read multipart: {}", e))
    })? {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().map(String::from);
                let declared_content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    CallAnalysisError::invalid_input(format!("failed to read file: {}", e))
                })?;

                // Browsers send an empty part when no file was chosen.
                if bytes.is_empty() && filename.as_deref().is_none_or(str::is_empty) {
                    continue;
                }

                tracing::debug!(
                    filename = filename.as_deref().unwrap_or(""),
                    content_type = %declared_content_type,
                    bytes = bytes.len(),
                    "Audio file received"
                );
                upload = Some(AudioUpload {
                    bytes,
                    declared_content_type,
                    filename,
                });
            }
            Some(URL_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    CallAnalysisError::invalid_input(format!("failed to read url field: {}", e))
                })?;
                url = Some(text);
            }
            other => {
                tracing::debug!(field = other.unwrap_or(""), "Ignoring unknown form field");
            }
        }
    }

    Ok((upload, url))
}
