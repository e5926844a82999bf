use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

/// Raw outcome of one GET. Status checking is left to the caller.
#[derive(Debug, Clone)]
pub struct FetchedAudio {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchedAudio {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait AudioFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedAudio, AudioFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioFetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("request timed out after {0:?}")]
    TimedOut(Duration),
    #[error("reading response body failed: {0}")]
    BodyReadFailed(String),
}
