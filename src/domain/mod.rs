mod analysis_result;
mod audio_source;
pub mod media_type;
mod prompt_template;
mod resolved_audio;
mod source_url;
mod transcript;
mod utterance;

pub use analysis_result::AnalysisResult;
pub use audio_source::{AudioSource, AudioUpload};
pub use prompt_template::{PromptTemplate, PromptTemplateError};
pub use resolved_audio::ResolvedAudio;
pub use source_url::{SourceUrl, SourceUrlError};
pub use transcript::Transcript;
pub use utterance::Utterance;
