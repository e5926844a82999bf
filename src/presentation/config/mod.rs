mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DownloadSettings, LlmProviderSetting, LlmSettings, LoggingSettings, PromptSettings,
    ServerSettings, Settings, TranscriptionProviderSetting, TranscriptionSettings,
    WorkspaceSettings,
};
