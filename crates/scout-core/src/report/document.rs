use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extract::split_reply;
use super::{CompanyName, DetailLevel};
use crate::config::ReportConfig;

/// A generated company report, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Company the report is about
    pub company_name: String,
    /// Tier the report was requested at
    pub detail_level: DetailLevel,
    /// Industry glyph taken from the first line of the reply
    pub emoji_marker: String,
    /// Markdown body
    pub body: String,
    /// Attribution line naming the model and tier
    pub generated_note: String,
    /// Model that produced the reply
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Builds a report from a raw model reply.
    pub fn from_reply(
        company: &CompanyName,
        level: DetailLevel,
        reply: &str,
        model: &str,
        config: &ReportConfig,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let split = split_reply(reply, config.emoji_rule, &config.default_emoji);

        Self {
            company_name: company.to_string(),
            detail_level: level,
            emoji_marker: split.emoji,
            body: split.body,
            generated_note: generated_note(model, level, generated_at),
            model: model.to_string(),
            generated_at,
        }
    }

    /// Converts the report to the markdown display string.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&self.emoji_marker);
        md.push_str("\n\n");

        if !self.body.trim().is_empty() {
            md.push_str(self.body.trim_end());
            md.push_str("\n\n");
        }

        md.push_str(&format!("*{}*\n", self.generated_note));

        md
    }
}

/// Attribution trailer, e.g. "Generated using gpt-4o (Summary) on April 03, 2025".
pub fn generated_note(model: &str, level: DetailLevel, at: DateTime<Utc>) -> String {
    format!(
        "Generated using {} ({}) on {}",
        model,
        level.display_name(),
        at.format("%B %d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generated_note() {
        let note = generated_note("gpt-4", DetailLevel::Concise, fixed_time());
        assert_eq!(note, "Generated using gpt-4 (Summary) on April 03, 2025");
    }

    #[test]
    fn test_to_markdown_layout() {
        let company = CompanyName::parse("Tesla").unwrap();
        let report = Report::from_reply(
            &company,
            DetailLevel::Detailed,
            "🚗\n## What the company does\nCars.",
            "gpt-4o",
            &ReportConfig::default(),
            fixed_time(),
        );

        assert_eq!(
            report.to_markdown(),
            "🚗\n\n## What the company does\nCars.\n\n*Generated using gpt-4o (Deep Research) on April 03, 2025*\n"
        );
    }

    #[test]
    fn test_to_markdown_empty_body() {
        let company = CompanyName::parse("Tesla").unwrap();
        let report = Report::from_reply(
            &company,
            DetailLevel::Concise,
            "",
            "gpt-4o",
            &ReportConfig::default(),
            fixed_time(),
        );

        assert_eq!(report.emoji_marker, "❓");
        assert!(report.to_markdown().starts_with("❓\n\n*Generated using"));
    }
}
