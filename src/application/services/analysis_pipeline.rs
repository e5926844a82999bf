use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::LlmClient;
use crate::domain::{AnalysisResult, PromptTemplate};

use super::call_analysis_error::CallAnalysisError;
use super::prompt_catalog::{PromptCatalog, STRUCTURED_DIALOGUE_VAR, TRANSCRIPT_VAR};

/// One LLM call in the analysis graph.
///
/// Separation is the root; summary and performance are leaves that both
/// consume the separation output. Performance never sees the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStage {
    Separation,
    Summary,
    Performance,
}

impl AnalysisStage {
    /// Execution order. Each stage appears after the stage it depends on.
    pub const ORDER: [AnalysisStage; 3] = [Self::Separation, Self::Summary, Self::Performance];

    /// 1-based position, as reported in `AnalysisStageFailed`.
    pub fn index(self) -> usize {
        match self {
            Self::Separation => 1,
            Self::Summary => 2,
            Self::Performance => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Separation => "separation",
            Self::Summary => "summary",
            Self::Performance => "performance",
        }
    }

    /// The stage whose completion this stage renders into its prompt; `None`
    /// means it reads the transcript.
    pub fn upstream(self) -> Option<AnalysisStage> {
        match self {
            Self::Separation => None,
            Self::Summary | Self::Performance => Some(Self::Separation),
        }
    }

    pub fn input_variable(self) -> &'static str {
        match self.upstream() {
            None => TRANSCRIPT_VAR,
            Some(_) => STRUCTURED_DIALOGUE_VAR,
        }
    }

    fn template(self, prompts: &PromptCatalog) -> &PromptTemplate {
        match self {
            Self::Separation => &prompts.separation,
            Self::Summary => &prompts.summary,
            Self::Performance => &prompts.performance,
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct AnalysisPipeline<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    prompts: Arc<PromptCatalog>,
    stage_timeout: Option<Duration>,
}

impl<L> AnalysisPipeline<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, prompts: Arc<PromptCatalog>) -> Self {
        Self {
            llm_client,
            prompts,
            stage_timeout: None,
        }
    }

    /// Bounds each individual completion call. Unbounded by default.
    pub fn with_stage_timeout(mut self, stage_timeout: Option<Duration>) -> Self {
        self.stage_timeout = stage_timeout;
        self
    }

    pub async fn run(&self, transcript: &str) -> Result<AnalysisResult, CallAnalysisError> {
        let started = Instant::now();
        let mut completions: HashMap<AnalysisStage, String> = HashMap::new();

        for stage in AnalysisStage::ORDER {
            let input = match stage.upstream() {
                None => transcript,
                Some(upstream) => completions.get(&upstream).map(String::as_str).ok_or_else(
                    || CallAnalysisError::AnalysisStageFailed {
                        stage_index: stage.index(),
                        stage: stage.name(),
                        reason: format!("{} output unavailable", upstream),
                    },
                )?,
            };

            let completion = self.invoke(stage, input).await?;
            completions.insert(stage, completion);
        }

        let mut take = |stage: AnalysisStage| completions.remove(&stage).unwrap_or_default();
        let result = AnalysisResult {
            structured_dialogue: take(AnalysisStage::Separation),
            summary: take(AnalysisStage::Summary),
            performance_report: take(AnalysisStage::Performance),
        };

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis pipeline completed"
        );
        Ok(result)
    }

    async fn invoke(&self, stage: AnalysisStage, input: &str) -> Result<String, CallAnalysisError> {
        let variables = HashMap::from([(stage.input_variable(), input)]);
        let prompt = stage.template(&self.prompts).render(&variables)?;

        tracing::debug!(
            stage = stage.name(),
            prompt_chars = prompt.len(),
            "Invoking text generation"
        );

        let failed = |reason: String| {
            tracing::error!(stage = stage.name(), reason = %reason, "Analysis stage failed");
            CallAnalysisError::AnalysisStageFailed {
                stage_index: stage.index(),
                stage: stage.name(),
                reason,
            }
        };

        let call = self.llm_client.complete(&prompt);
        let completion = match self.stage_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(outcome) => outcome.map_err(|e| failed(e.to_string()))?,
                Err(_) => return Err(failed(format!("timed out after {:?}", limit))),
            },
            None => call.await.map_err(|e| failed(e.to_string()))?,
        };

        if completion.trim().is_empty() {
            return Err(failed("empty completion".to_string()));
        }

        tracing::info!(
            stage = stage.name(),
            completion_chars = completion.len(),
            "Analysis stage completed"
        );
        Ok(completion)
    }
}
