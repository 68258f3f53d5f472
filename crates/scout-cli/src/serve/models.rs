//! API request/response models for the research form.

use serde::{Deserialize, Serialize};

use scout_core::{DetailLevel, Report, Session};

/// Body of `POST /api/report`.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Company name as typed into the form.
    pub company: String,
    /// Requested tier; defaults to the concise summary.
    #[serde(default)]
    pub level: DetailLevel,
}

/// Successful `POST /api/report` response.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: Report,
    /// Markdown display string (emoji, body, trailer).
    pub display: String,
    pub session: Session,
}

/// Error response; `session` is the unchanged session, when there is one.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}
