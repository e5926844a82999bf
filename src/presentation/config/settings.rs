use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::audio::{
    BROWSER_USER_AGENT, DEFAULT_DOWNLOAD_TIMEOUT, TranscriptionProvider,
};
use crate::infrastructure::llm::LlmProvider;

use super::environment::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub download: DownloadSettings,
    pub workspace: WorkspaceSettings,
    pub prompts: PromptSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_size_bytes: 200 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProviderSetting,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub stage_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderSetting {
    #[default]
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

impl LlmProviderSetting {
    fn api_key_env_var(self) -> Option<&'static str> {
        match self {
            Self::Gemini => Some("GOOGLE_API_KEY"),
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::Mock => None,
        }
    }
}

impl From<LlmProviderSetting> for LlmProvider {
    fn from(setting: LlmProviderSetting) -> Self {
        match setting {
            LlmProviderSetting::Gemini => LlmProvider::Gemini,
            LlmProviderSetting::OpenAi => LlmProvider::OpenAi,
            LlmProviderSetting::Mock => LlmProvider::Mock,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub poll_interval_ms: u64,
    pub max_polls: u32,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: TranscriptionProviderSetting::default(),
            api_key: None,
            base_url: None,
            poll_interval_ms: 3000,
            max_polls: 400,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[default]
    #[serde(rename = "assemblyai")]
    AssemblyAi,
    Mock,
}

impl TranscriptionProviderSetting {
    fn api_key_env_var(self) -> Option<&'static str> {
        match self {
            Self::AssemblyAi => Some("ASSEMBLY_API_KEY"),
            Self::Mock => None,
        }
    }
}

impl From<TranscriptionProviderSetting> for TranscriptionProvider {
    fn from(setting: TranscriptionProviderSetting) -> Self {
        match setting {
            TranscriptionProviderSetting::AssemblyAi => TranscriptionProvider::AssemblyAi,
            TranscriptionProviderSetting::Mock => TranscriptionProvider::Mock,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_DOWNLOAD_TIMEOUT.as_secs(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Parent of the per-request temp dirs; the OS temp dir when unset.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Directory with `separation.txt`, `summary.txt`, `performance.txt` overrides.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layers `config/base.toml`, `config/{environment}.toml` and `APP__*`
    /// environment variables, later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&format!("config/{}", environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings.with_provider_key_fallbacks(|name| std::env::var(name).ok()))
    }

    /// Fills missing provider keys from the providers' conventional variables
    /// (`GOOGLE_API_KEY`, `OPENAI_API_KEY`, `ASSEMBLY_API_KEY`).
    pub fn with_provider_key_fallbacks(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.llm.api_key.as_deref().is_none_or(str::is_empty) {
            if let Some(var) = self.llm.provider.api_key_env_var() {
                self.llm.api_key = lookup(var).or(self.llm.api_key);
            }
        }
        if self.transcription.api_key.as_deref().is_none_or(str::is_empty) {
            if let Some(var) = self.transcription.provider.api_key_env_var() {
                self.transcription.api_key = lookup(var).or(self.transcription.api_key);
            }
        }
        self
    }
}
