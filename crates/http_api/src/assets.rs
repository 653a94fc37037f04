use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_FILE: &str = "index.html";

/// Files under `public_dir` are served as-is with a content type guessed
/// from the extension. Any path without a matching file, including `/`,
/// gets `index.html` so the client-side router can take over.
pub fn static_service(public_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join(INDEX_FILE)))
}
