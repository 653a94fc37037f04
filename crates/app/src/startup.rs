use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::{AppError, Result};

pub const APP_NAME: &str = "todo";
pub const DOCUMENT_FILE_NAME: &str = "todo.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPaths {
    pub app_data_dir: PathBuf,
    pub document_path: PathBuf,
}

impl AppPaths {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let document_path = app_data_dir.join(DOCUMENT_FILE_NAME);
        Self {
            app_data_dir,
            document_path,
        }
    }

    /// Per-user data directory following the host OS conventions
    /// (`$XDG_DATA_HOME/<app>` on Linux, `Application Support` on macOS,
    /// roaming app data on Windows).
    pub fn resolve(app_name: &str) -> Result<Self> {
        let dirs = ProjectDirs::from("", "", app_name).ok_or(AppError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }
}

/// Creates `dir` and any missing parents; an existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
