//! HTTP route handlers for the research form.
//!
//! Handlers are kept thin, delegating prompt building and reply handling
//! to `scout_core`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::warn;

use scout_core::{CompanyName, Session};

use super::models::{ErrorResponse, ReportQuery, ReportResponse};
use super::templates;
use super::AppState;

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - The research form.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::render_form_page(state.requester.model()))
}

// =============================================================================
// API Handlers
// =============================================================================

/// GET `/api/session` - Reports currently held for the form.
pub async fn api_session(State(state): State<Arc<AppState>>) -> Json<Session> {
    Json(state.session.read().await.clone())
}

/// POST `/api/report` - Request a report for a company.
///
/// Request body:
/// ```json
/// { "company": "Tesla", "level": "concise" }
/// ```
///
/// Returns 400 for a blank company name and 502 when the model call fails.
/// A failed call leaves the stored reports as they were.
pub async fn api_report(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ReportQuery>,
) -> Response {
    let Some(company) = CompanyName::parse(&query.company) else {
        return error_response(StatusCode::BAD_REQUEST, "Please enter a company name.", None);
    };

    // The lock is not held across the model call
    let outcome = state.requester.request_report(&company, query.level).await;

    let updated = {
        let mut session = state.session.write().await;
        let updated = std::mem::take(&mut *session).apply(outcome);
        *session = updated.clone();
        updated
    };

    if let Some(notice) = updated.notice.clone() {
        return error_response(StatusCode::BAD_GATEWAY, &notice, Some(updated));
    }

    match updated.report(query.level).cloned() {
        Some(report) => Json(ReportResponse {
            display: report.to_markdown(),
            report,
            session: updated,
        })
        .into_response(),
        None => {
            warn!(company = %company, level = %query.level, "report missing from session after success");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Report was not stored",
                Some(updated),
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str, session: Option<Session>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            session,
        }),
    )
        .into_response()
}
