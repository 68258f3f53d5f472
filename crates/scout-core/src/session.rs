use serde::{Deserialize, Serialize};

use crate::report::{DetailLevel, Report, ReportError};

/// What one user has on screen: the last company and the last report of
/// each tier.
///
/// Sessions are plain values. They are passed into
/// [`ReportRequester::research`](crate::ReportRequester::research) and a new
/// session comes back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Company the current reports are about
    pub company_name: Option<String>,
    pub concise: Option<Report>,
    pub detailed: Option<Report>,
    /// Message from the last failed request, cleared on success
    pub notice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored report for a tier.
    pub fn report(&self, level: DetailLevel) -> Option<&Report> {
        match level {
            DetailLevel::Concise => self.concise.as_ref(),
            DetailLevel::Detailed => self.detailed.as_ref(),
        }
    }

    /// Folds the outcome of one request into the session.
    ///
    /// A report for a different company drops the other tier's report.
    /// A failure only replaces the notice.
    pub fn apply(mut self, outcome: Result<Report, ReportError>) -> Self {
        match outcome {
            Ok(report) => {
                if self.company_name.as_deref() != Some(report.company_name.as_str()) {
                    self.concise = None;
                    self.detailed = None;
                    self.company_name = Some(report.company_name.clone());
                }
                match report.detail_level {
                    DetailLevel::Concise => self.concise = Some(report),
                    DetailLevel::Detailed => self.detailed = Some(report),
                }
                self.notice = None;
            }
            Err(err) => {
                self.notice = Some(format!("Error generating report: {err}"));
            }
        }
        self
    }
}
