use std::path::Path;
use std::sync::Arc;

use crate::application::ports::AudioFetcher;
use crate::domain::media_type::{
    extension_for_media_type, extension_of, is_acceptable_download, is_audio_media_type,
};
use crate::domain::{AudioSource, AudioUpload, ResolvedAudio, SourceUrl};

use super::call_analysis_error::CallAnalysisError;
use super::workspace::ScopedWorkspace;

const DOWNLOAD_STEM: &str = "downloaded_audio";
const UPLOAD_STEM: &str = "uploaded_audio";
/// Stays under the common 255-byte file name limit.
const MAX_UPLOAD_NAME_BYTES: usize = 200;

/// Turns an [`AudioSource`] into a single validated file inside a workspace.
pub struct AudioSourceResolver<F>
where
    F: AudioFetcher + ?Sized,
{
    fetcher: Arc<F>,
}

impl<F> AudioSourceResolver<F>
where
    F: AudioFetcher + ?Sized,
{
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    pub async fn resolve(
        &self,
        source: AudioSource,
        workspace: &ScopedWorkspace,
    ) -> Result<ResolvedAudio, CallAnalysisError> {
        match source {
            AudioSource::Upload(upload) => self.resolve_upload(upload, workspace).await,
            AudioSource::RemoteUrl(url) => self.resolve_remote(&url, workspace).await,
        }
    }

    async fn resolve_upload(
        &self,
        upload: AudioUpload,
        workspace: &ScopedWorkspace,
    ) -> Result<ResolvedAudio, CallAnalysisError> {
        if !is_audio_media_type(&upload.declared_content_type) {
            tracing::warn!(
                content_type = %upload.declared_content_type,
                "Rejected upload with non-audio content type"
            );
            return Err(CallAnalysisError::InvalidMediaType {
                content_type: upload.declared_content_type,
            });
        }

        let (file_name, extension) =
            upload_file_name(upload.filename.as_deref(), &upload.declared_content_type);
        let path = workspace.write_file(&file_name, &upload.bytes).await?;

        tracing::info!(
            file_name = %file_name,
            bytes = upload.bytes.len(),
            "Upload written to workspace"
        );

        let byte_size = file_size(&path).await;
        ResolvedAudio::new(path, extension, byte_size)
            .ok_or_else(|| CallAnalysisError::invalid_input("uploaded file is empty"))
    }

    async fn resolve_remote(
        &self,
        raw_url: &str,
        workspace: &ScopedWorkspace,
    ) -> Result<ResolvedAudio, CallAnalysisError> {
        let source_url = SourceUrl::parse(raw_url)
            .map_err(|e| CallAnalysisError::invalid_input(e.to_string()))?;
        let extension = source_url.extension();

        if source_url.as_str() != raw_url.trim() {
            tracing::debug!(original = %raw_url, rewritten = %source_url, "Rewrote source url");
        }
        tracing::info!(url = %source_url, extension = %extension, "Downloading audio");

        let fetched = self
            .fetcher
            .fetch(source_url.as_url())
            .await
            .map_err(|e| CallAnalysisError::FetchFailed {
                reason: e.to_string(),
            })?;

        if !fetched.is_success() {
            tracing::warn!(url = %source_url, status = fetched.status, "Audio download rejected");
            return Err(CallAnalysisError::DownloadFailed {
                status: fetched.status,
            });
        }

        if !is_acceptable_download(fetched.content_type.as_deref(), &extension) {
            tracing::warn!(
                url = %source_url,
                content_type = fetched.content_type.as_deref().unwrap_or(""),
                "Downloaded content does not look like audio, continuing anyway"
            );
        }

        let file_name = format!("{}{}", DOWNLOAD_STEM, extension);
        let path = workspace.write_file(&file_name, &fetched.body).await?;
        let byte_size = file_size(&path).await;

        tracing::info!(bytes = byte_size, file_name = %file_name, "Audio download stored");

        ResolvedAudio::new(path, extension, byte_size).ok_or(CallAnalysisError::EmptyDownload)
    }
}

/// Keeps only the final component of a client-supplied name so it cannot
/// point outside the workspace. Names too long for the filesystem are replaced
/// by a generated one that keeps the extension.
fn upload_file_name(filename: Option<&str>, content_type: &str) -> (String, String) {
    let base_name = filename
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| name.to_str())
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "." && *name != "..");

    let extension = base_name
        .and_then(extension_of)
        .filter(|ext| ext.len() <= MAX_UPLOAD_NAME_BYTES - UPLOAD_STEM.len())
        .unwrap_or_else(|| extension_for_media_type(content_type).to_string());

    match base_name {
        Some(name) if name.len() <= MAX_UPLOAD_NAME_BYTES => (name.to_string(), extension),
        _ => (format!("{}{}", UPLOAD_STEM, extension), extension),
    }
}

async fn file_size(path: &Path) -> u64 {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.len())
        .unwrap_or(0)
}
