use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::dashboard::filters::DashboardFilters;
use crate::dashboard::render::{escape_html, RenderMode};
use crate::dashboard::{Dashboard, DashboardVariant};
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
    default_variant: DashboardVariant,
}

impl AppState {
    pub fn new(dashboard: Dashboard, default_variant: DashboardVariant) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            default_variant,
        }
    }
}

#[derive(Debug)]
pub enum ServerError {
    BadRequest(String),
    Internal(Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Internal(err) => {
                tracing::error!(error = %err, "Failed to render dashboard");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let body = format!(
            "<!DOCTYPE html>\n<html><body><h1>{}</h1><p>{}</p><p><a href=\"/\">Reset filters</a></p></body></html>\n",
            status,
            escape_html(&message)
        );
        (status, Html(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves the dashboard until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "Dashboard listening on http://{}", local);
    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}

pub(crate) async fn page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> std::result::Result<Html<String>, ServerError> {
    let variant = match pairs.iter().find(|(k, _)| k == "variant") {
        Some((_, v)) => v.parse().map_err(ServerError::BadRequest)?,
        None => state.default_variant,
    };
    let filters = DashboardFilters::from_query(&pairs).map_err(|e| match e {
        Error::Config(msg) => ServerError::BadRequest(msg),
        other => ServerError::Internal(other),
    })?;

    tracing::debug!(?variant, ?filters, "Rendering dashboard");
    let html = state
        .dashboard
        .render(variant, &filters, RenderMode::Live)
        .map_err(ServerError::Internal)?;
    Ok(Html(html))
}

async fn health() -> &'static str {
    "ok"
}
