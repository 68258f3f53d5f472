use crate::config::{LLMConfig, DEFAULT_OPENAI_MODEL};
use super::{LLMError, OpenAIClient, LLM};

/// LLM Provider configuration.
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI or any OpenAI-compatible endpoint
    OpenAI {
        base_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
    },
    /// OpenRouter
    OpenRouter {
        base_url: Option<String>,
        api_key: Option<String>,
        model: String,
    },
    /// Local Ollama instance
    Ollama {
        base_url: Option<String>,
        model: String,
    },
}

impl Default for Provider {
    fn default() -> Self {
        Provider::OpenAI {
            base_url: None,
            api_key: None,
            model: None,
        }
    }
}

impl Provider {
    /// Creates a provider from LLMConfig, resolving the API key from env.
    pub fn from_config(config: &LLMConfig) -> Result<Self, LLMError> {
        match config.provider.as_str() {
            "openai" => Ok(Provider::OpenAI {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model.clone(),
            }),
            "openrouter" => Ok(Provider::OpenRouter {
                base_url: config.base_url.clone(),
                api_key: config.api_key_or_env(),
                model: config.model_or_default(),
            }),
            "ollama" => Ok(Provider::Ollama {
                base_url: config.base_url.clone(),
                model: config.model_or_default(),
            }),
            other => Err(LLMError::UnknownProvider(other.to_string())),
        }
    }

    /// Name used in config files and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "openai",
            Provider::OpenRouter { .. } => "openrouter",
            Provider::Ollama { .. } => "ollama",
        }
    }

    /// Creates an LLM client from the provider configuration.
    pub fn build(self) -> Result<Box<dyn LLM>, LLMError> {
        let name = self.name();
        match self {
            Provider::OpenAI { base_url, api_key, model } => {
                let key = api_key.ok_or_else(|| LLMError::MissingApiKey(name.to_string()))?;
                let mdl = model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

                match base_url {
                    Some(base) => Ok(Box::new(OpenAIClient::new(base, key, mdl))),
                    None => Ok(Box::new(OpenAIClient::openai(key, mdl))),
                }
            }

            Provider::OpenRouter { base_url, api_key, model } => {
                let key = api_key.ok_or_else(|| LLMError::MissingApiKey(name.to_string()))?;

                match base_url {
                    Some(base) => Ok(Box::new(OpenAIClient::new(base, key, model))),
                    None => Ok(Box::new(OpenAIClient::openrouter(key, model))),
                }
            }

            Provider::Ollama { base_url, model } => match base_url {
                Some(base) => Ok(Box::new(OpenAIClient::new(base, "", model))),
                None => Ok(Box::new(OpenAIClient::ollama(model))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_OLLAMA_MODEL, DEFAULT_OPENROUTER_MODEL};

    #[test]
    fn test_default_provider() {
        let provider = Provider::default();
        assert!(matches!(provider, Provider::OpenAI { .. }));
    }

    #[test]
    fn test_openai_without_key_fails() {
        let result = Provider::default().build();
        assert!(matches!(result, Err(LLMError::MissingApiKey(p)) if p == "openai"));
    }

    #[test]
    fn test_ollama_provider_build() {
        let provider = Provider::Ollama {
            base_url: None,
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        };
        let llm = provider.build().unwrap();
        assert_eq!(llm.model(), DEFAULT_OLLAMA_MODEL);
    }

    #[test]
    fn test_openai_provider_uses_default_model() {
        let provider = Provider::OpenAI {
            base_url: Some("http://localhost:8080/v1".to_string()),
            api_key: Some("test".to_string()),
            model: None,
        };
        let llm = provider.build().unwrap();
        assert_eq!(llm.model(), DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn test_unknown_provider() {
        let config = LLMConfig {
            provider: "carrier-pigeon".to_string(),
            ..LLMConfig::default()
        };
        assert!(matches!(
            Provider::from_config(&config),
            Err(LLMError::UnknownProvider(_))
        ));
    }

    #[test]
    fn test_openrouter_from_config_keeps_base_url() {
        let config = LLMConfig {
            provider: "openrouter".to_string(),
            base_url: Some("https://gateway.example.com/v1".to_string()),
            api_key: Some("or-key".to_string()),
            ..LLMConfig::default()
        };

        let provider = Provider::from_config(&config).unwrap();
        assert!(matches!(
            &provider,
            Provider::OpenRouter { base_url: Some(url), model, .. }
                if url == "https://gateway.example.com/v1" && model == DEFAULT_OPENROUTER_MODEL
        ));

        let llm = provider.build().unwrap();
        assert_eq!(llm.model(), DEFAULT_OPENROUTER_MODEL);
    }
}
