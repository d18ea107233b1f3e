//! Router assembly: the whole directory, gzip-compressed.

use std::path::Path;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

pub fn app(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(CompressionLayer::new().gzip(true))
}
