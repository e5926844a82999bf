use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;

use callsight::application::ports::LlmClient;
use callsight::application::services::{
    AnalysisPipeline, CallAnalysisError, CallAnalysisService, PromptCatalog, WorkspaceFactory,
};
use callsight::domain::AudioUpload;
use callsight::infrastructure::llm::MockLlmClient;

use crate::fakes::{
    FaultyLlmClient, RecordingFetcher, RecordingTranscriptionEngine, two_speaker_utterances,
};

type Service<L> = CallAnalysisService<RecordingFetcher, RecordingTranscriptionEngine, L>;

struct Harness<L: LlmClient> {
    root: tempfile::TempDir,
    fetcher: Arc<RecordingFetcher>,
    engine: Arc<RecordingTranscriptionEngine>,
    llm: Arc<L>,
    service: Service<L>,
}

fn harness<L: LlmClient>(
    fetcher: RecordingFetcher,
    engine: RecordingTranscriptionEngine,
    llm: L,
) -> Harness<L> {
    let root = tempfile::TempDir::new().unwrap();
    let fetcher = Arc::new(fetcher);
    let engine = Arc::new(engine);
    let llm = Arc::new(llm);
    let pipeline = AnalysisPipeline::new(Arc::clone(&llm), Arc::new(PromptCatalog::builtin()));
    let service = CallAnalysisService::from_parts(
        WorkspaceFactory::new(root.path().to_path_buf()),
        Arc::clone(&fetcher),
        Arc::clone(&engine),
        pipeline,
    );

    Harness {
        root,
        fetcher,
        engine,
        llm,
        service,
    }
}

fn wav_upload() -> AudioUpload {
    AudioUpload {
        bytes: Bytes::from_static(b"RIFF....WAVEfmt "),
        declared_content_type: "audio/wav".to_string(),
        filename: Some("call.wav".to_string()),
    }
}

fn is_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}

#[tokio::test]
async fn given_wav_upload_when_analyzing_then_returns_three_stage_outputs() {
    let h = harness(
        RecordingFetcher::failing(),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::scripted(["SEP", "SUM", "PERF"]),
    );

    let response = h
        .service
        .analyze_request(Some(wav_upload()), None)
        .await
        .unwrap();

    assert_eq!(response.separate_format, "SEP");
    assert_eq!(response.summary, "SUM");
    assert_eq!(response.performance, "PERF");

    let prompts = h.llm.prompts();
    assert!(prompts[0].contains("Speaker A: Hello\nSpeaker B: Hi there\n"));
    assert!(prompts[1].contains("SEP"));
    assert!(prompts[2].contains("SEP"));
    assert!(!prompts[2].contains("SUM"));

    assert!(h.fetcher.requested().is_empty());
    assert!(is_empty_dir(h.root.path()));
}

#[tokio::test]
async fn given_upload_when_transcribing_then_file_exists_inside_workspace_during_call() {
    let h = harness(
        RecordingFetcher::failing(),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::scripted(["SEP", "SUM", "PERF"]),
    );

    h.service
        .analyze_request(Some(wav_upload()), None)
        .await
        .unwrap();

    let seen = h.engine.seen.lock().unwrap();
    let (path, existed, _) = &seen[0];
    assert!(*existed);
    assert!(path.starts_with(h.root.path()));
    assert!(!path.exists());
}

#[tokio::test]
async fn given_github_blob_url_when_analyzing_then_raw_url_is_downloaded() {
    let h = harness(
        RecordingFetcher::responding(200, Some("audio/wav"), b"RIFF....WAVE"),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::scripted(["SEP", "SUM", "PERF"]),
    );

    let response = h
        .service
        .analyze_request(
            None,
            Some("https://github.com/org/repo/blob/main/call.wav".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(response.separate_format, "SEP");
    assert_eq!(
        h.fetcher.requested(),
        vec!["https://raw.githubusercontent.com/org/repo/main/call.wav".to_string()]
    );
    let seen_paths = h.engine.seen_paths();
    assert!(seen_paths[0].ends_with("downloaded_audio.wav"));
    assert!(is_empty_dir(h.root.path()));
}

#[tokio::test]
async fn given_both_file_and_url_when_analyzing_then_file_wins() {
    let h = harness(
        RecordingFetcher::responding(200, Some("audio/wav"), b"RIFF"),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::scripted(["SEP", "SUM", "PERF"]),
    );

    h.service
        .analyze_request(
            Some(wav_upload()),
            Some("https://cdn.example.com/other.wav".to_string()),
        )
        .await
        .unwrap();

    assert!(h.fetcher.requested().is_empty());
}

#[tokio::test]
async fn given_neither_file_nor_url_when_analyzing_then_invalid_input() {
    let h = harness(
        RecordingFetcher::failing(),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::default(),
    );

    for url in [None, Some(String::new()), Some("   ".to_string())] {
        let result = h.service.analyze_request(None, url).await;

        assert!(matches!(result, Err(CallAnalysisError::InvalidInput { .. })));
    }
    assert!(h.engine.seen_paths().is_empty());
    assert!(h.llm.prompts().is_empty());
}

#[tokio::test]
async fn given_not_found_url_when_analyzing_then_download_failed_and_workspace_removed() {
    let h = harness(
        RecordingFetcher::responding(404, Some("text/html"), b"nope"),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::default(),
    );

    let result = h
        .service
        .analyze_request(None, Some("https://cdn.example.com/missing.wav".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(CallAnalysisError::DownloadFailed { status: 404 })
    ));
    assert!(h.engine.seen_paths().is_empty());
    assert!(is_empty_dir(h.root.path()));
}

#[tokio::test]
async fn given_non_audio_upload_when_analyzing_then_nothing_downstream_runs() {
    let h = harness(
        RecordingFetcher::failing(),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::default(),
    );
    let upload = AudioUpload {
        declared_content_type: "text/plain".to_string(),
        ..wav_upload()
    };

    let result = h.service.analyze_request(Some(upload), None).await;

    assert!(matches!(
        result,
        Err(CallAnalysisError::InvalidMediaType { .. })
    ));
    assert!(h.engine.seen_paths().is_empty());
    assert!(is_empty_dir(h.root.path()));
}

#[tokio::test]
async fn given_transcription_error_when_analyzing_then_no_llm_calls_and_workspace_removed() {
    let h = harness(
        RecordingFetcher::failing(),
        RecordingTranscriptionEngine::failing("provider unavailable"),
        MockLlmClient::default(),
    );

    let result = h.service.analyze_request(Some(wav_upload()), None).await;

    assert!(matches!(
        result,
        Err(CallAnalysisError::TranscriptionFailed { .. })
    ));
    assert!(h.llm.prompts().is_empty());
    assert!(is_empty_dir(h.root.path()));
}

#[tokio::test]
async fn given_failure_at_each_stage_when_analyzing_then_stage_reported_and_workspace_removed() {
    for failing_call in 1..=3 {
        let h = harness(
            RecordingFetcher::failing(),
            RecordingTranscriptionEngine::returning(two_speaker_utterances()),
            FaultyLlmClient::erroring_on(failing_call),
        );

        let result = h.service.analyze_request(Some(wav_upload()), None).await;

        match result {
            Err(CallAnalysisError::AnalysisStageFailed { stage_index, .. }) => {
                assert_eq!(stage_index, failing_call)
            }
            other => panic!("expected stage {failing_call} failure, got {other:?}"),
        }
        assert!(is_empty_dir(h.root.path()), "stage {failing_call}");
    }
}

#[tokio::test]
async fn given_concurrent_requests_when_analyzing_then_workspaces_are_isolated() {
    let h = harness(
        RecordingFetcher::failing(),
        RecordingTranscriptionEngine::returning(two_speaker_utterances()),
        MockLlmClient::scripted(["SEP", "SUM", "PERF"]),
    );

    let (first, second) = tokio::join!(
        h.service.analyze_request(Some(wav_upload()), None),
        h.service.analyze_request(Some(wav_upload()), None),
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    let paths = h.engine.seen_paths();
    assert_eq!(paths.len(), 2);
    assert_ne!(paths[0].parent(), paths[1].parent());
    assert!(is_empty_dir(h.root.path()));
}
