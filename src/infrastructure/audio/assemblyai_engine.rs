use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionOptions};
use crate::domain::{ResolvedAudio, Utterance};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
const DEFAULT_MAX_POLLS: u32 = 400;
/// Label used when the provider returns plain text without speaker turns.
const UNLABELLED_SPEAKER: &str = "A";

/// AssemblyAI: upload the file, submit a transcript job, poll until it settles.
pub struct AssemblyAiEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
    speaker_labels: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

#[derive(Deserialize)]
struct TranscriptResponse {
    id: String,
    status: TranscriptStatus,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    utterances: Option<Vec<UtterancePayload>>,
}

#[derive(Deserialize)]
struct UtterancePayload {
    speaker: String,
    text: String,
}

impl AssemblyAiEngine {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }

    pub fn with_polling(mut self, poll_interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = poll_interval;
        self.max_polls = max_polls.max(1);
        self
    }

    async fn upload(&self, audio_data: Vec<u8>) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(format!("{}/v2/upload", self.base_url))
            .header("authorization", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio_data)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("upload: {}", e)))?;

        let uploaded: UploadResponse = parse_json(response, "upload").await?;
        Ok(uploaded.upload_url)
    }

    async fn submit(
        &self,
        audio_url: &str,
        options: TranscriptionOptions,
    ) -> Result<TranscriptResponse, TranscriptionError> {
        let response = self
            .client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&TranscriptRequest {
                audio_url,
                speaker_labels: options.speaker_labels,
            })
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("submit: {}", e)))?;

        parse_json(response, "submit").await
    }

    async fn fetch_status(&self, id: &str) -> Result<TranscriptResponse, TranscriptionError> {
        let response = self
            .client
            .get(format!("{}/v2/transcript/{}", self.base_url, id))
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("poll: {}", e)))?;

        parse_json(response, "poll").await
    }

    async fn wait_for_completion(
        &self,
        mut transcript: TranscriptResponse,
    ) -> Result<TranscriptResponse, TranscriptionError> {
        let mut polls = 0;
        loop {
            match transcript.status {
                TranscriptStatus::Completed => return Ok(transcript),
                TranscriptStatus::Error => {
                    return Err(TranscriptionError::TranscriptionFailed(
                        transcript
                            .error
                            .unwrap_or_else(|| "provider reported an error".to_string()),
                    ));
                }
                TranscriptStatus::Queued | TranscriptStatus::Processing => {}
            }

            if polls >= self.max_polls {
                return Err(TranscriptionError::PollingExhausted(polls));
            }
            polls += 1;

            tokio::time::sleep(self.poll_interval).await;
            transcript = self.fetch_status(&transcript.id).await?;
            tracing::debug!(
                transcript_id = %transcript.id,
                status = ?transcript.status,
                polls = polls,
                "Polled AssemblyAI transcript"
            );
        }
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    step: &str,
) -> Result<T, TranscriptionError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "{} status {}: {}",
            step, status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("{} parse response: {}", step, e)))
}

fn into_utterances(transcript: TranscriptResponse) -> Vec<Utterance> {
    match transcript.utterances {
        Some(utterances) if !utterances.is_empty() => utterances
            .into_iter()
            .map(|u| Utterance::new(u.speaker, u.text))
            .collect(),
        _ => transcript
            .text
            .filter(|text| !text.trim().is_empty())
            .map(|text| vec![Utterance::new(UNLABELLED_SPEAKER, text)])
            .unwrap_or_default(),
    }
}

#[async_trait]
impl TranscriptionEngine for AssemblyAiEngine {
    async fn transcribe(
        &self,
        audio: &ResolvedAudio,
        options: TranscriptionOptions,
    ) -> Result<Vec<Utterance>, TranscriptionError> {
        let audio_data = tokio::fs::read(audio.local_path())
            .await
            .map_err(|e| TranscriptionError::AudioReadFailed(e.to_string()))?;

        tracing::debug!(bytes = audio_data.len(), "Uploading audio to AssemblyAI");
        let upload_url = self.upload(audio_data).await?;

        let submitted = self.submit(&upload_url, options).await?;
        tracing::info!(
            transcript_id = %submitted.id,
            speaker_labels = options.speaker_labels,
            "AssemblyAI transcript submitted"
        );

        let completed = self.wait_for_completion(submitted).await?;
        let utterances = into_utterances(completed);

        tracing::info!(
            utterances = utterances.len(),
            "AssemblyAI transcription completed"
        );
        Ok(utterances)
    }
}
