use std::path::PathBuf;

use crate::error::Result;
use crate::startup::{AppPaths, ensure_dir};
use crate::store::DocumentStore;

/// Paths the server needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub document_path: PathBuf,
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn new(paths: AppPaths, public_dir: PathBuf) -> Self {
        Self {
            data_dir: paths.app_data_dir,
            document_path: paths.document_path,
            public_dir,
        }
    }
}

/// Application state shared with the HTTP layer.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub store: DocumentStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = DocumentStore::new(config.document_path.clone());
        Self { config, store }
    }

    /// Creates the public and data directories and seeds the document.
    /// Returns `true` when the document was created by this call.
    pub fn initialize(&self) -> Result<bool> {
        ensure_dir(&self.config.public_dir)?;
        ensure_dir(&self.config.data_dir)?;
        self.store.ensure_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_creates_directories_and_document() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::new(temp_dir.path().join("data"));
        let config = AppConfig::new(paths, temp_dir.path().join("public"));
        let state = AppState::new(config);

        assert!(state.initialize().expect("initialize"));
        assert!(state.config.public_dir.is_dir());
        assert!(state.config.document_path.is_file());
        assert_eq!(state.store.path(), state.config.document_path.as_path());

        assert!(!state.initialize().expect("second initialize"));
    }
}
