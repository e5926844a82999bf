use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{PromptTemplate, PromptTemplateError};

pub const TRANSCRIPT_VAR: &str = "transcript";
pub const STRUCTURED_DIALOGUE_VAR: &str = "structured_dialogue";

const SEPARATION_FILE: &str = "separation.txt";
const SUMMARY_FILE: &str = "summary.txt";
const PERFORMANCE_FILE: &str = "performance.txt";

const BUILTIN_SEPARATION: &str = include_str!("../../../prompts/separation.txt");
const BUILTIN_SUMMARY: &str = include_str!("../../../prompts/summary.txt");
const BUILTIN_PERFORMANCE: &str = include_str!("../../../prompts/performance.txt");

#[derive(Debug, thiserror::Error)]
pub enum PromptCatalogError {
    #[error("reading prompt {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("prompt {file}: {source}")]
    Invalid {
        file: &'static str,
        source: PromptTemplateError,
    },
}

/// The three analysis templates.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    pub separation: PromptTemplate,
    pub summary: PromptTemplate,
    pub performance: PromptTemplate,
}

impl PromptCatalog {
    pub fn builtin() -> Self {
        Self {
            separation: PromptTemplate::new(BUILTIN_SEPARATION, [TRANSCRIPT_VAR]),
            summary: PromptTemplate::new(BUILTIN_SUMMARY, [STRUCTURED_DIALOGUE_VAR]),
            performance: PromptTemplate::new(BUILTIN_PERFORMANCE, [STRUCTURED_DIALOGUE_VAR]),
        }
    }

    /// Loads templates from `directory`, falling back to the built-in text for
    /// any file that is not there.
    pub fn load(directory: Option<&Path>) -> Result<Self, PromptCatalogError> {
        let Some(directory) = directory else {
            return Ok(Self::builtin());
        };

        Ok(Self {
            separation: load_one(directory, SEPARATION_FILE, BUILTIN_SEPARATION, TRANSCRIPT_VAR)?,
            summary: load_one(directory, SUMMARY_FILE, BUILTIN_SUMMARY, STRUCTURED_DIALOGUE_VAR)?,
            performance: load_one(
                directory,
                PERFORMANCE_FILE,
                BUILTIN_PERFORMANCE,
                STRUCTURED_DIALOGUE_VAR,
            )?,
        })
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn load_one(
    directory: &Path,
    file: &'static str,
    builtin: &str,
    variable: &str,
) -> Result<PromptTemplate, PromptCatalogError> {
    let path = directory.join(file);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => {
            tracing::info!(path = %path.display(), "Loaded prompt override");
            text
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => builtin.to_string(),
        Err(source) => return Err(PromptCatalogError::Read { path, source }),
    };

    PromptTemplate::checked(text, [variable])
        .map_err(|source| PromptCatalogError::Invalid { file, source })
}
