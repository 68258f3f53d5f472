//! Default values for Scout configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// LLM Defaults
// ============================================================================

/// Default LLM provider.
pub const DEFAULT_LLM_PROVIDER: &str = "openai";

// OpenAI defaults
/// Default OpenAI API URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

// Ollama defaults
/// Default Ollama API URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/v1";
/// Default Ollama model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

// OpenRouter defaults
/// Default OpenRouter API URL.
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";
/// Default OpenRouter model; OpenRouter ids carry the vendor prefix.
pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o";

// ============================================================================
// Report Defaults
// ============================================================================

/// Token budget for a concise summary.
pub const DEFAULT_CONCISE_MAX_TOKENS: u32 = 700;

/// Token budget for a detailed report.
pub const DEFAULT_DETAILED_MAX_TOKENS: u32 = 1500;

/// Sampling temperature used for both tiers.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Glyph shown when the reply carries no usable emoji line.
pub const DEFAULT_EMOJI: &str = "❓";

/// Phrase the model is told to use for unknown fields.
pub const UNAVAILABLE_PHRASE: &str = "Information not readily available.";

/// System-role instruction sent with every report request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful research assistant.";

/// Default report sections as `(title, concise hint)`, in prompt order.
pub const DEFAULT_SECTIONS: &[(&str, &str)] = &[
    ("What the company does", "include primary focus and mission"),
    ("Key products or services", "list main offerings with a brief description"),
    ("Industry and competitors", "name industry and 3-4 key competitors"),
    ("Recent news", "last 6 months, include 2-3 key events"),
    ("Executive team", "list CEO, CFO, and one other key executive with titles"),
    ("Size and location", "employee count, HQ location, and major offices"),
    (
        "Revenue or funding",
        "if public, latest annual revenue; if private, notable funding rounds",
    ),
    (
        "Marketing data",
        "target audience, positioning, key channels and notable campaigns",
    ),
    ("Unique aspects", "2-3 distinctive features or achievements"),
];

// ============================================================================
// Server Defaults
// ============================================================================

/// Default port for the local web form.
pub const DEFAULT_SERVER_PORT: u16 = 3434;

/// Project-local config file name.
pub const DEFAULT_CONFIG_FILE: &str = "scout.toml";
