use std::collections::HashMap;

use config::{Config, File, FileFormat};

use callsight::infrastructure::audio::DEFAULT_DOWNLOAD_TIMEOUT;

use callsight::presentation::config::{
    LlmProviderSetting, Settings, TranscriptionProviderSetting,
};

fn from_toml(toml: &str) -> Settings {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn given_empty_config_when_loading_then_defaults_apply() {
    let settings = from_toml("");

    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.llm.provider, LlmProviderSetting::Gemini);
    assert_eq!(
        settings.transcription.provider,
        TranscriptionProviderSetting::AssemblyAi
    );
    assert_eq!(
        settings.download.timeout_seconds,
        DEFAULT_DOWNLOAD_TIMEOUT.as_secs()
    );
    assert_eq!(settings.download.timeout_seconds, 30);
    assert!(settings.download.user_agent.contains("Mozilla"));
    assert!(settings.llm.stage_timeout_seconds.is_none());
    assert!(settings.workspace.root.is_none());
}

#[test]
fn given_partial_sections_when_loading_then_unset_fields_keep_defaults() {
    let settings = from_toml(
        r#"
        [server]
        port = 9090

        [llm]
        provider = "openai"
        model = "gpt-4o-mini"

        [transcription]
        provider = "mock"
        "#,
    );

    assert_eq!(settings.server.port, 9090);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.llm.provider, LlmProviderSetting::OpenAi);
    assert_eq!(settings.llm.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(
        settings.transcription.provider,
        TranscriptionProviderSetting::Mock
    );
    assert_eq!(settings.transcription.max_polls, 400);
}

#[test]
fn given_missing_keys_when_applying_fallbacks_then_provider_variables_are_used() {
    let vars = HashMap::from([
        ("GOOGLE_API_KEY", "google-key"),
        ("ASSEMBLY_API_KEY", "assembly-key"),
        ("OPENAI_API_KEY", "openai-key"),
    ]);

    let settings =
        from_toml("").with_provider_key_fallbacks(|name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(settings.llm.api_key.as_deref(), Some("google-key"));
    assert_eq!(settings.transcription.api_key.as_deref(), Some("assembly-key"));
}

#[test]
fn given_configured_key_when_applying_fallbacks_then_it_is_kept() {
    let settings = from_toml(
        r#"
        [llm]
        api_key = "from-config"
        "#,
    )
    .with_provider_key_fallbacks(|_| Some("from-env".to_string()));

    assert_eq!(settings.llm.api_key.as_deref(), Some("from-config"));
}

#[test]
fn given_mock_providers_when_applying_fallbacks_then_no_key_is_looked_up() {
    let settings = from_toml(
        r#"
        [llm]
        provider = "mock"
        [transcription]
        provider = "mock"
        "#,
    )
    .with_provider_key_fallbacks(|_| Some("unused".to_string()));

    assert!(settings.llm.api_key.is_none());
    assert!(settings.transcription.api_key.is_none());
}
