mod assemblyai_engine;
mod http_audio_fetcher;
mod mock_transcription_engine;
mod transcription_engine_factory;

pub use assemblyai_engine::AssemblyAiEngine;
pub use http_audio_fetcher::{BROWSER_USER_AGENT, DEFAULT_DOWNLOAD_TIMEOUT, HttpAudioFetcher};
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
