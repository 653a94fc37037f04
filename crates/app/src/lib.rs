pub mod app;
pub mod error;
pub mod startup;
pub mod store;

pub use app::{AppConfig, AppState};
pub use error::{ApiError, AppError, Result};
pub use startup::{APP_NAME, AppPaths, DOCUMENT_FILE_NAME, ensure_dir};
pub use store::DocumentStore;
