//! Local web form for requesting reports.
//!
//! A single page with a company field and two tabs (Summary and Deep
//! Research). The page talks to a small JSON API; the server keeps one
//! [`Session`] holding the last report of each tier.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `templates` - HTML/CSS/JS template rendering

mod handlers;
mod models;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use color_eyre::eyre::Result;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use scout_core::{ReportRequester, Session, LLM};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// Builds prompts and calls the model.
    pub requester: ReportRequester<Box<dyn LLM>>,
    /// Reports currently shown in the form.
    pub session: RwLock<Session>,
}

impl AppState {
    pub fn new(requester: ReportRequester<Box<dyn LLM>>) -> Self {
        Self {
            requester,
            session: RwLock::new(Session::new()),
        }
    }
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the web form server.
pub struct ServeConfig {
    /// Port to listen on.
    pub port: u16,
    /// Whether to open the browser automatically.
    pub open_browser: bool,
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Builds the router with all page and API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/report", post(handlers::api_report))
        .route("/api/session", get(handlers::api_session))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Start the web form server.
pub async fn start_server(
    requester: ReportRequester<Box<dyn LLM>>,
    config: ServeConfig,
) -> Result<()> {
    let model = requester.model().to_string();
    let app = router(Arc::new(AppState::new(requester)));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let url = format!("http://localhost:{}", config.port);

    println!("Starting Scout research form...");
    println!("Form: {}", url);
    println!("Model: {}", model);
    println!("Press Ctrl+C to stop\n");

    info!(%addr, %model, "serving research form");

    if config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!("could not open browser: {e}");
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
