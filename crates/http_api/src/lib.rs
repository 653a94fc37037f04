mod assets;
mod errors;
mod handlers;
mod state;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::trace::TraceLayer;

pub use errors::HttpError;
pub use state::HttpState;

/// The one API route; everything else is served from the public directory.
/// Documents of any size are accepted, so the body limit is lifted here.
pub const DOCUMENT_ROUTE: &str = "/data/todo.json";

pub fn router(state: HttpState) -> Router<()> {
    let static_service = assets::static_service(&state.app.config.public_dir);

    Router::new()
        .route(
            DOCUMENT_ROUTE,
            get(handlers::get_document)
                .patch(handlers::patch_document)
                .layer(DefaultBodyLimit::disable()),
        )
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
