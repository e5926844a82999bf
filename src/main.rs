use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use callsight::application::services::{
    AnalysisPipeline, CallAnalysisService, PromptCatalog, WorkspaceFactory,
};
use callsight::infrastructure::audio::{HttpAudioFetcher, TranscriptionEngineFactory};
use callsight::infrastructure::llm::LlmClientFactory;
use callsight::infrastructure::observability::{TracingConfig, init_tracing};
use callsight::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    let tracing_config = TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.enable_json,
        ..TracingConfig::default()
    }
    .with_level(&settings.logging.level);
    init_tracing(&tracing_config);

    let fetcher = Arc::new(HttpAudioFetcher::new(
        &settings.download.user_agent,
        Duration::from_secs(settings.download.timeout_seconds),
    )?);

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.transcription.provider.into(),
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        Duration::from_millis(settings.transcription.poll_interval_ms),
        settings.transcription.max_polls,
    )?;

    let llm_client = LlmClientFactory::create(
        settings.llm.provider.into(),
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.base_url.clone(),
        settings.llm.temperature,
    )?;

    let prompts = Arc::new(PromptCatalog::load(settings.prompts.directory.as_deref())?);
    let pipeline = AnalysisPipeline::new(llm_client, prompts).with_stage_timeout(
        settings
            .llm
            .stage_timeout_seconds
            .map(Duration::from_secs),
    );

    let workspaces = settings
        .workspace
        .root
        .clone()
        .map(WorkspaceFactory::new)
        .unwrap_or_default();

    let call_analysis_service = Arc::new(CallAnalysisService::from_parts(
        workspaces,
        fetcher,
        transcription_engine,
        pipeline,
    ));

    let state = AppState {
        call_analysis_service,
    };
    let router = create_router(state, settings.server.max_upload_size_bytes);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!(
        %addr,
        llm_provider = ?settings.llm.provider,
        transcription_provider = ?settings.transcription.provider,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
