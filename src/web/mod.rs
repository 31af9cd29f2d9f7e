//! Read-only preview server.
//!
//! Serves the preset catalog as JSON and rendered preview pages as HTML so a
//! browser can show what the terminal playground only outlines.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/presets` - List presets (optional `?family=`)
//! - `GET /api/designs` - List gallery designs
//! - `GET /preview/{family}/{name}` - Rendered preset page (`Custom Layout` renders the custom layout)
//! - `GET /preview/custom/{family}` - Rendered custom layout page
//! - `GET /preview/design/{name}` - Rendered design page
//! - `GET /assets/{*path}` - Embedded stylesheets and pages
//!
//! No endpoint writes to the custom layout store.

pub mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::catalog::PresetCatalog;
use crate::config::Config;
use crate::models::{LayoutFamily, PresetSelection};
use crate::preview::{ContentTrust, PreviewDocument, PreviewRenderer, PreviewTheme};
use crate::store::{CustomLayoutStore, FileStorage};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the preview server.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: PresetCatalog,
    renderer: PreviewRenderer,
    /// Directory holding the persisted custom layouts
    data_dir: PathBuf,
}

impl AppState {
    /// Creates the state from configuration and the custom layout directory.
    #[must_use]
    pub fn new(config: &Config, data_dir: PathBuf) -> Self {
        Self {
            catalog: PresetCatalog::builtin(),
            renderer: PreviewRenderer::new(
                ContentTrust::from_flag(config.preview.trusted_content),
                PreviewTheme::from_mode(config.ui.theme_mode),
            ),
            data_dir,
        }
    }

    /// Returns the custom layout directory.
    #[must_use]
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for the preset list.
#[derive(Debug, Deserialize)]
pub struct PresetQuery {
    /// Restrict the list to one family.
    pub family: Option<String>,
}

/// Preset list response.
#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    /// Matching presets in catalog order.
    pub presets: Vec<PresetSummary>,
}

/// Summary of a preset.
#[derive(Debug, Serialize)]
pub struct PresetSummary {
    /// Family the preset belongs to.
    pub family: LayoutFamily,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Preview page URL.
    pub preview_url: String,
}

/// Design list response.
#[derive(Debug, Serialize)]
pub struct DesignListResponse {
    /// Gallery designs in catalog order.
    pub designs: Vec<DesignSummary>,
}

/// Summary of a gallery design.
#[derive(Debug, Serialize)]
pub struct DesignSummary {
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Preview page URL.
    pub preview_url: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn parse_family(value: &str) -> ApiResult<LayoutFamily> {
    value.parse().map_err(|e: anyhow::Error| {
        (StatusCode::BAD_REQUEST, Json(ApiError::new(e.to_string())))
    })
}

fn not_found(error: impl std::fmt::Display) -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError::new(error.to_string())))
}

fn preview_url(parts: &[&str]) -> String {
    let encoded: Vec<String> = parts.iter().map(|p| p.replace(' ', "%20")).collect();
    format!("/preview/{}", encoded.join("/"))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/presets - List presets, optionally for one family.
async fn list_presets(
    State(state): State<AppState>,
    Query(query): Query<PresetQuery>,
) -> ApiResult<Json<PresetListResponse>> {
    let families = match query.family.as_deref() {
        Some(family) => vec![parse_family(family)?],
        None => LayoutFamily::ALL.to_vec(),
    };

    let presets = families
        .into_iter()
        .flat_map(|family| {
            state
                .catalog
                .presets(family)
                .iter()
                .map(move |preset| PresetSummary {
                    family,
                    name: preset.name.to_string(),
                    description: preset.description.to_string(),
                    preview_url: preview_url(&[family.id(), preset.name]),
                })
        })
        .collect();

    Ok(Json(PresetListResponse { presets }))
}

/// GET /api/designs - List gallery designs.
async fn list_designs(State(state): State<AppState>) -> Json<DesignListResponse> {
    let designs = state
        .catalog
        .designs()
        .iter()
        .map(|design| DesignSummary {
            name: design.name.to_string(),
            description: design.description.to_string(),
            preview_url: preview_url(&["design", design.name]),
        })
        .collect();
    Json(DesignListResponse { designs })
}

/// GET /preview/{family}/{name} - Rendered preset.
async fn preview_preset(
    State(state): State<AppState>,
    Path((family, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let family = parse_family(&family)?;
    let document = match PresetSelection::from_name(&name) {
        PresetSelection::Custom => render_custom(&state, family),
        PresetSelection::Preset(name) => {
            let preset = state.catalog.lookup(family, &name).map_err(not_found)?;
            let title = format!("{} - {}", family.display_name(), preset.name);
            state
                .renderer
                .render(&title, preset.markup(), preset.stylesheet())
        }
    };
    Ok(html_response(&document, &headers))
}

/// GET /preview/custom/{family} - Rendered custom layout, read from disk.
async fn preview_custom(
    State(state): State<AppState>,
    Path(family): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let family = parse_family(&family)?;
    Ok(html_response(&render_custom(&state, family), &headers))
}

/// Renders the family's custom layout as currently persisted.
fn render_custom(state: &AppState, family: LayoutFamily) -> PreviewDocument {
    let mut store = CustomLayoutStore::new(FileStorage::new(state.data_dir.clone()));
    let layout = store.get(family);
    let title = format!("{} - Custom Layout", family.display_name());
    state.renderer.render(&title, &layout.html, &layout.css)
}

/// GET /preview/design/{name} - Rendered gallery design.
async fn preview_design(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let design = state.catalog.design(&name).map_err(not_found)?;
    let document = state
        .renderer
        .render(design.name, design.markup(), design.stylesheet());
    Ok(html_response(&document, &headers))
}

/// Strong entity tag over the rendered page.
fn etag(document: &PreviewDocument) -> String {
    format!("\"{:x}\"", Sha256::digest(document.as_str().as_bytes()))
}

/// HTML response with an `ETag`; answers 304 when the client's copy matches.
fn html_response(document: &PreviewDocument, headers: &HeaderMap) -> Response {
    let tag = etag(document);
    let matches = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.split(',').any(|candidate| candidate.trim() == tag));

    let tag_header = HeaderValue::from_str(&tag).unwrap_or(HeaderValue::from_static("\"\""));
    if matches {
        debug!("Preview unchanged, answering 304");
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, tag_header)]).into_response();
    }

    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
            (header::ETAG, tag_header),
        ],
        document.as_str().to_string(),
    )
        .into_response()
}

// ============================================================================
// Router
// ============================================================================

/// Creates the preview server router.
pub fn create_router(state: AppState) -> Router {
    // Local tool: any origin may read previews
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(static_files::serve_index))
        .route("/health", get(health_check))
        .route("/api/presets", get(list_presets))
        .route("/api/designs", get(list_designs))
        .route("/preview/custom/{family}", get(preview_custom))
        .route("/preview/design/{name}", get(preview_design))
        .route("/preview/{family}/{name}", get(preview_preset))
        .route("/assets/{*path}", get(static_files::serve_asset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the preview server.
///
/// # Errors
///
/// Returns an error if the data directory cannot be resolved or the
/// server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let data_dir = config.data_dir()?;
    info!("Custom layouts read from {}", data_dir.display());

    let state = AppState::new(&config, data_dir);
    let app = create_router(state);

    info!("Starting layoutlab preview server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
