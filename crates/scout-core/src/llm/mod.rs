mod error;
mod openai;
mod provider;

pub use error::LLMError;
pub use openai::OpenAIClient;
pub use provider::Provider;

use async_trait::async_trait;

/// A single chat-completion call: one system instruction, one user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System-role instruction.
    pub system: String,
    /// User-role prompt.
    pub prompt: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Trait for Large Language Model providers.
///
/// This abstraction allows swapping between different chat-completion
/// backends without changing the report code.
///
/// # Example
///
/// ```ignore
/// use scout_core::llm::{CompletionRequest, Provider, LLM};
///
/// let llm = Provider::Ollama {
///     base_url: None,
///     model: "llama3".to_string(),
/// }.build()?;
///
/// let reply = llm.complete(&CompletionRequest {
///     system: "You are a helpful research assistant.".into(),
///     prompt: "Summarize Acme Corp.".into(),
///     max_tokens: 700,
///     temperature: 0.7,
/// }).await?;
/// ```
#[async_trait]
pub trait LLM: Send + Sync {
    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send the request and return the assistant's reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl LLM for Box<dyn LLM> {
    fn model(&self) -> &str {
        (**self).model()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        (**self).complete(request).await
    }
}
