use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, ReportConfig};
use crate::llm::{CompletionRequest, LLMError, Provider, LLM};
use crate::report::prompts::build_report_prompt;
use crate::report::{CompanyName, DetailLevel, Report};
use crate::Session;

/// Remediation shown when no API key can be found.
const API_KEY_REMEDIATION: &str = r#"Set OPENAI_API_KEY (or SCOUT_LLM_API_KEY) in your environment, or add the key to scout.toml:

[llm]
api_key = "your-secret-api-key-here"

Run `scout init` to create a scout.toml with all default settings."#;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration is unusable; no request can be made.
    #[error("{message}\n\n{remediation}")]
    MissingConfig {
        message: String,
        remediation: String,
    },

    /// The chat-completion call failed.
    #[error("{0}")]
    RemoteCall(#[from] LLMError),
}

impl ReportError {
    /// Whether the failure is fatal for the process rather than one request.
    pub fn is_config(&self) -> bool {
        matches!(self, ReportError::MissingConfig { .. })
    }
}

/// Builds prompts, calls the model, and turns replies into reports.
pub struct ReportRequester<L: LLM> {
    llm: L,
    config: ReportConfig,
}

impl<L: LLM> ReportRequester<L> {
    /// Creates a new report requester.
    pub fn new(llm: L, config: ReportConfig) -> Self {
        Self { llm, config }
    }

    /// Model identifier reports are generated with.
    pub fn model(&self) -> &str {
        self.llm.model()
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }

    /// The exact request sent for a company at a detail level.
    pub fn completion_request(&self, company: &CompanyName, level: DetailLevel) -> CompletionRequest {
        let max_tokens = match level {
            DetailLevel::Concise => self.config.concise_max_tokens,
            DetailLevel::Detailed => self.config.detailed_max_tokens,
        };

        CompletionRequest {
            system: self.config.system_prompt.clone(),
            prompt: build_report_prompt(company, level, &self.config.sections),
            max_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Requests a report for the given company.
    pub async fn request_report(
        &self,
        company: &CompanyName,
        level: DetailLevel,
    ) -> Result<Report, ReportError> {
        let request = self.completion_request(company, level);

        info!(
            company = %company,
            level = %level,
            model = self.llm.model(),
            max_tokens = request.max_tokens,
            "requesting report"
        );

        let reply = self.llm.complete(&request).await.map_err(|e| {
            warn!(company = %company, level = %level, error = %e, "report request failed");
            ReportError::from(e)
        })?;

        info!(company = %company, level = %level, reply_len = reply.len(), "report received");

        Ok(Report::from_reply(
            company,
            level,
            &reply,
            self.llm.model(),
            &self.config,
            Utc::now(),
        ))
    }

    /// Runs one request against a session and returns the updated session.
    ///
    /// On failure the stored reports are untouched and only the notice changes.
    pub async fn research(
        &self,
        session: Session,
        company: &CompanyName,
        level: DetailLevel,
    ) -> Session {
        let outcome = self.request_report(company, level).await;
        session.apply(outcome)
    }
}

impl ReportRequester<Box<dyn LLM>> {
    /// Builds a requester from the full configuration.
    ///
    /// Fails with [`ReportError::MissingConfig`] when the provider is unknown
    /// or needs an API key that is not set.
    pub fn from_config(config: &Config) -> Result<Self, ReportError> {
        let llm = Provider::from_config(&config.llm)
            .and_then(Provider::build)
            .map_err(config_error)?;

        Ok(Self::new(llm, config.report.clone()))
    }
}

/// Maps a provider setup failure onto a configuration error.
fn config_error(err: LLMError) -> ReportError {
    match err {
        LLMError::MissingApiKey(provider) => ReportError::MissingConfig {
            message: format!("API key for provider '{provider}' not found!"),
            remediation: API_KEY_REMEDIATION.to_string(),
        },
        other => ReportError::MissingConfig {
            message: other.to_string(),
            remediation: "Set [llm] provider to one of: openai, openrouter, ollama.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_has_remediation() {
        let err = config_error(LLMError::MissingApiKey("openai".to_string()));
        assert!(err.is_config());
        let message = err.to_string();
        assert!(message.contains("'openai'"));
        assert!(message.contains("OPENAI_API_KEY"));
        assert!(message.contains("scout.toml"));
    }

    #[test]
    fn test_from_config_unknown_provider() {
        let mut config = Config::default();
        config.llm.provider = "nope".to_string();
        let err = ReportRequester::from_config(&config).err().unwrap();
        assert!(matches!(err, ReportError::MissingConfig { .. }));
    }

    #[test]
    fn test_from_config_ollama_needs_no_key() {
        let mut config = Config::default();
        config.llm.provider = "ollama".to_string();
        config.llm.model = Some("mistral".to_string());
        let requester = ReportRequester::from_config(&config).unwrap();
        assert_eq!(requester.model(), "mistral");
    }
}
