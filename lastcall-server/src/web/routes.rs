//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::warn;
use url::Url;

use crate::maps::MapsError;
use crate::planner::{OptionSelector, ProbeError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/custom/:station", get(station_options))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing the configured destinations.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        origin: state.origin.to_string(),
        destinations: state
            .destinations
            .iter()
            .map(|name| DestinationLink {
                name: name.clone(),
                href: station_href(name),
            })
            .collect(),
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// Link to a destination's options page, percent-encoding the name.
fn station_href(destination: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/custom") else {
        return String::from("/");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(destination);
    }
    url.path().to_string()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Leave-now options toward one destination, as of the time of the request.
async fn station_options(
    State(state): State<AppState>,
    headers: HeaderMap,
    UrlPath(station): UrlPath<String>,
) -> Response {
    let html = accepts_html(&headers);

    match render_options(&state, station.trim(), html).await {
        Ok(response) => response,
        Err(e) if html => e.into_html_response(),
        Err(e) => e.into_response(),
    }
}

async fn render_options(
    state: &AppState,
    destination: &str,
    html: bool,
) -> Result<Response, AppError> {
    if destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "Destination must not be blank".to_string(),
        });
    }

    let now = Local::now();
    let selector = OptionSelector::new(
        state.directions.as_ref(),
        state.planner.as_ref(),
        &state.origin,
    );
    let options = selector.select_options(destination, now).await?;

    if html {
        let template = OptionsTemplate {
            origin: state.origin.to_string(),
            destination: destination.to_string(),
            generated_at: now.format("%H:%M").to_string(),
            options: options
                .iter()
                .map(|route| RouteView::from_route(route, now))
                .collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(OptionsResponse::new(&state.origin, destination, now, &options)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    UpstreamTimeout { message: String },
    Internal { message: String },
}

impl From<ProbeError> for AppError {
    fn from(e: ProbeError) -> Self {
        let message = e.to_string();
        match e {
            ProbeError::Upstream(MapsError::Timeout) => AppError::UpstreamTimeout { message },
            _ => AppError::Upstream { message },
        }
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.as_str()),
            AppError::UpstreamTimeout { message } => {
                (StatusCode::GATEWAY_TIMEOUT, message.as_str())
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.as_str()),
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        warn!(%status, %message, "request failed");
    }

    /// Render as the HTML error page.
    fn into_html_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let (title, summary) = match self {
            AppError::BadRequest { .. } => ("Bad Request", "That destination can't be looked up."),
            AppError::Upstream { .. } => ("Bad Gateway", "Directions are unavailable right now."),
            AppError::UpstreamTimeout { .. } => {
                ("Gateway Timeout", "The directions service did not answer in time.")
            }
            AppError::Internal { .. } => ("Internal Error", "Something went wrong."),
        };
        let template = ErrorTemplate {
            title: title.to_string(),
            message: summary.to_string(),
            details: Some(message.to_string()),
        };

        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("Template error: {}", e)).into_response(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
