mod config;
mod quake;
mod view;

pub use config::{AppConfig, ConfigError};

use anyhow::Context;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use quake::types::QuakeRecord;
use quake::{fetch_and_normalize, FeedError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use view::PageRenderer;

const DEFAULT_LOG_FILTER: &str = "quake_feed_lib=info,tower_http=info";

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    client: reqwest::Client,
    renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("failed to build upstream http client")?;
        let renderer = PageRenderer::new().context("failed to load page template")?;
        Ok(Self {
            config: Arc::new(config),
            client,
            renderer: Arc::new(renderer),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EarthquakesResponse {
    success: bool,
    data: Vec<QuakeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

struct ApiError(FeedError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "earthquake feed request failed");
        let body = ErrorResponse {
            success: false,
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

async fn list_earthquakes(
    State(state): State<AppState>,
) -> Result<Json<EarthquakesResponse>, ApiError> {
    let data = fetch_and_normalize(&state.client, &state.config.upstream_url)
        .await
        .map_err(ApiError)?;
    Ok(Json(EarthquakesResponse {
        success: true,
        data,
    }))
}

// Upstream failures degrade to an empty list here; only /api/earthquakes reports them.
async fn index(State(state): State<AppState>) -> Response {
    let records = match fetch_and_normalize(&state.client, &state.config.upstream_url).await {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(error = %error, "rendering empty earthquake list");
            Vec::new()
        }
    };

    match state.renderer.render_index(&records) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "failed to render earthquake list");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/earthquakes", get(list_earthquakes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(upstream = %config.upstream_url, "quake-feed starting");

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let address = listener
        .local_addr()
        .context("failed to read listener address")?;
    let app = build_router(AppState::new(config)?);
    tracing::info!("HTTP server listening on {}", address);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
