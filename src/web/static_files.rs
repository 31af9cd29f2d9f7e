//! Embedded static files for the preview server.
//!
//! The base preview stylesheet and the index page are compiled into the
//! binary so the server runs without any files next to it.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Files embedded at compile time from the `assets` directory.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.html"]
#[include = "*.css"]
pub struct StaticAssets;

/// GET / - The index page.
pub async fn serve_index() -> Response {
    serve_file("index.html")
}

/// GET /assets/{*path} - An embedded asset.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    serve_file(path.trim_start_matches('/'))
}

/// Serves a specific file from embedded assets.
fn serve_file(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// HTML always revalidates; stylesheets may be cached for an hour.
fn cache_control_for_path(path: &str) -> &'static str {
    if std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
    {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(
            cache_control_for_path("index.html"),
            "no-cache, must-revalidate"
        );
        assert_eq!(cache_control_for_path("preview.css"), "public, max-age=3600");
    }

    #[test]
    fn test_assets_are_embedded() {
        assert!(StaticAssets::get("index.html").is_some());
        assert!(StaticAssets::get("preview.css").is_some());
    }
}
