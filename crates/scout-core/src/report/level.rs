use std::fmt;

use serde::{Deserialize, Serialize};

/// Verbosity tier of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    /// Bulleted summary.
    #[default]
    Concise,
    /// Long-form report with section headers.
    #[serde(alias = "deep_research")]
    Detailed,
}

impl DetailLevel {
    /// Returns all levels in display order.
    pub fn all() -> &'static [DetailLevel] {
        &[DetailLevel::Concise, DetailLevel::Detailed]
    }

    /// Returns the display name shown on tabs and in trailers.
    pub fn display_name(&self) -> &'static str {
        match self {
            DetailLevel::Concise => "Summary",
            DetailLevel::Detailed => "Deep Research",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLevel::Concise => write!(f, "concise"),
            DetailLevel::Detailed => write!(f, "detailed"),
        }
    }
}

/// A company name that is known to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    /// Trims the input and rejects it if nothing is left.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_trims() {
        let name = CompanyName::parse("  Tesla  ").unwrap();
        assert_eq!(name.as_str(), "Tesla");
    }

    #[test]
    fn test_blank_company_name_rejected() {
        assert!(CompanyName::parse("").is_none());
        assert!(CompanyName::parse(" \t\n").is_none());
    }

    #[test]
    fn test_detail_level_serde() {
        let level: DetailLevel = serde_json::from_str("\"deep_research\"").unwrap();
        assert_eq!(level, DetailLevel::Detailed);
        assert_eq!(serde_json::to_string(&DetailLevel::Concise).unwrap(), "\"concise\"");
    }
}
