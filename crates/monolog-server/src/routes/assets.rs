use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serve files from `dir`, answering any miss with `dir/index.html` so the
/// client-side router can take over.
pub fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
