use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use super::AppState;

/// Serves the built site. Paths without a matching file get `index.html` so
/// client-side routes survive a reload.
pub fn router(static_dir: &Path) -> Router<AppState> {
    let index = static_dir.join("index.html");
    Router::new().fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
}
