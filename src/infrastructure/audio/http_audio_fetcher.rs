use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::application::ports::{AudioFetchError, AudioFetcher, FetchedAudio};

/// Some hosts refuse or rewrite requests that do not look like a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpAudioFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAudioFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, AudioFetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AudioFetchError::RequestFailed(format!("client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn map_error(&self, error: reqwest::Error) -> AudioFetchError {
        if error.is_timeout() {
            AudioFetchError::TimedOut(self.timeout)
        } else {
            AudioFetchError::RequestFailed(error.to_string())
        }
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedAudio, AudioFetchError> {
        tracing::debug!(url = %url, "Fetching remote audio");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                AudioFetchError::TimedOut(self.timeout)
            } else {
                AudioFetchError::BodyReadFailed(e.to_string())
            }
        })?;

        tracing::debug!(
            status = status,
            content_type = content_type.as_deref().unwrap_or(""),
            bytes = body.len(),
            "Remote audio response received"
        );

        Ok(FetchedAudio {
            status,
            content_type,
            body,
        })
    }
}
