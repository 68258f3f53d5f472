pub mod config;
pub mod llm;
pub mod report;
pub mod session;

pub use config::{Config, ConfigError, LLMConfig, ReportConfig, ServerConfig};
pub use llm::{CompletionRequest, LLMError, OpenAIClient, Provider, LLM};
pub use report::{
    CompanyName, DetailLevel, EmojiRule, Report, ReportError, ReportRequester, Section,
};
pub use session::Session;
