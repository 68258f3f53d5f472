//! `scout research`: one report printed to the terminal.

use std::time::Duration;

use color_eyre::eyre::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use scout_core::{CompanyName, DetailLevel, ReportRequester, Session, LLM};

/// Requests a report and prints its markdown.
pub async fn run<L: LLM>(
    requester: &ReportRequester<L>,
    company: &str,
    detailed: bool,
) -> Result<()> {
    let Some(company) = CompanyName::parse(company) else {
        bail!("Please enter a company name.");
    };

    let level = if detailed {
        DetailLevel::Detailed
    } else {
        DetailLevel::Concise
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Researching {} ({}) with {}...",
        company,
        level.display_name(),
        requester.model()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let session = requester.research(Session::new(), &company, level).await;

    spinner.finish_and_clear();

    if let Some(notice) = session.notice {
        bail!(notice);
    }

    match session.report(level) {
        Some(report) => {
            println!("{}", report.to_markdown());
            Ok(())
        }
        None => bail!("No report was produced for {company}"),
    }
}
