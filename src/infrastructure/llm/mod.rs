mod gemini_client;
mod llm_client_factory;
mod mock_llm_client;
mod openai_client;

pub use gemini_client::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use llm_client_factory::{LlmClientFactory, LlmProvider};
pub use mock_llm_client::MockLlmClient;
pub use openai_client::{DEFAULT_OPENAI_MODEL, OpenAiClient};
