use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

use super::gemini_client::GeminiClient;
use super::mock_llm_client::MockLlmClient;
use super::openai_client::OpenAiClient;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LlmProvider {
    Gemini,
    OpenAi,
    Mock,
}

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(
        provider: LlmProvider,
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
        temperature: Option<f32>,
    ) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        let require_key = |name: &str| {
            api_key
                .clone()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| LlmClientError::Configuration(format!("API key required for {}", name)))
        };

        match provider {
            LlmProvider::Gemini => {
                let client = GeminiClient::new(require_key("Gemini")?, model, base_url)
                    .with_temperature(temperature);
                Ok(Arc::new(client))
            }
            LlmProvider::OpenAi => {
                let client = OpenAiClient::new(require_key("OpenAI")?, model, base_url)
                    .with_temperature(temperature);
                Ok(Arc::new(client))
            }
            LlmProvider::Mock => Ok(Arc::new(MockLlmClient::matching([
                (
                    "at separating",
                    "Customer: Hi, I'm calling to ask about your plans.\nAgent: Sure! I'd be happy to help you with that.",
                ),
                ("at summarizing", "1. **Key Discussion Points**:\n   - Plan inquiry"),
                ("at evaluating", "- **Opening (8/10)**: Friendly and clear."),
            ]))),
        }
    }
}
