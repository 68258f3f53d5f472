//! Prompt templates for the two report tiers.

use serde::{Deserialize, Serialize};

use super::{CompanyName, DetailLevel};
use crate::config::{DEFAULT_SECTIONS, UNAVAILABLE_PHRASE};

/// Emoji instruction shared by both templates.
const EMOJI_INSTRUCTION: &str = "At the start of the response, on its own line, include a single emoji that represents the company's primary industry (e.g., 🚗 for automotive, 💻 for tech, 🏥 for healthcare).";

/// One section the model is asked to cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section label, used verbatim in both templates.
    pub title: String,
    /// Guidance appended to the label in the concise template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, hint: Option<&str>) -> Self {
        Self {
            title: title.into(),
            hint: hint.map(str::to_string),
        }
    }

    /// The built-in section list.
    pub fn defaults() -> Vec<Section> {
        DEFAULT_SECTIONS
            .iter()
            .map(|&(title, hint)| Section::new(title, Some(hint)))
            .collect()
    }
}

/// Builds the user prompt for a company at the given detail level.
pub fn build_report_prompt(
    company: &CompanyName,
    level: DetailLevel,
    sections: &[Section],
) -> String {
    match level {
        DetailLevel::Concise => build_concise_prompt(company, sections),
        DetailLevel::Detailed => build_detailed_prompt(company, sections),
    }
}

fn build_concise_prompt(company: &CompanyName, sections: &[Section]) -> String {
    let list = sections
        .iter()
        .map(|s| match &s.hint {
            Some(hint) => format!("- {} ({})", s.title, hint),
            None => format!("- {}", s.title),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Provide a concise summary of {company} with the following sections in a bulleted list format:
{list}

Format each section as a markdown bulleted list (e.g., - Item). Keep it clear and concise but informative. If information is unavailable, say '{UNAVAILABLE_PHRASE}' {EMOJI_INSTRUCTION}"#
    )
}

fn build_detailed_prompt(company: &CompanyName, sections: &[Section]) -> String {
    let list = sections
        .iter()
        .map(|s| format!("- {}", s.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Provide a detailed, in-depth analysis of {company} with the following sections:
{list}

Format the response with clear section headers using markdown (e.g., ## Section Name) and provide detailed paragraphs for each section. If information is unavailable, say '{UNAVAILABLE_PHRASE}' {EMOJI_INSTRUCTION}"#
    )
}
