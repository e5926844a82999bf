use std::sync::{Mutex, PoisonError};

use crate::application::ports::{LlmClient, LlmClientError};

/// Canned completions for tests and scaffold mode.
///
/// A `matching` client answers from the prompt alone, so concurrent requests
/// never see each other's answers. A `scripted` client answers in call order,
/// cycling when exhausted; that order is shared by every caller, so use it
/// only when a single request drives the client.
pub struct MockLlmClient {
    rules: Vec<(String, String)>,
    responses: Vec<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: Vec::new(),
            responses: responses.into_iter().map(Into::into).collect(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answers with the response of the first rule whose needle occurs in the
    /// prompt, or an empty completion when none does.
    pub fn matching<I, N, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(needle, response)| (needle.into(), response.into()))
                .collect(),
            responses: Vec::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::scripted(["Mock answer"])
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let call_index = {
            let mut prompts = self.prompts.lock().unwrap_or_else(PoisonError::into_inner);
            prompts.push(prompt.to_string());
            prompts.len() - 1
        };

        if let Some((_, response)) = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
        {
            return Ok(response.clone());
        }

        if self.responses.is_empty() {
            return Ok(String::new());
        }
        Ok(self.responses[call_index % self.responses.len()].clone())
    }
}
