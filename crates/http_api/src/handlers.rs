use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use serde_json::Value;
use todo_app::AppError;
use todo_core::{OkResponse, TodoDocument};

use crate::{errors::HttpError, state::HttpState};

pub async fn get_document(
    State(state): State<HttpState>,
) -> Result<Json<TodoDocument>, HttpError> {
    let store = state.app.store.clone();
    let document = run_blocking(move || store.load()).await.map_err(|err| {
        tracing::warn!(error = %err, "failed to load document");
        HttpError::internal(err)
    })?;
    Ok(Json(document))
}

/// The body is parsed as JSON whatever the declared content type says.
pub async fn patch_document(
    State(state): State<HttpState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let body = body.map_err(|err| rejected(AppError::BodyRead(err.body_text())))?;
    let value: Value = serde_json::from_slice(&body)
        .map_err(|err| rejected(AppError::InvalidBody(err)))?;
    let store = state.app.store.clone();
    run_blocking(move || store.replace_value(value))
        .await
        .map_err(rejected)?;
    Ok(Json(OkResponse::default()))
}

fn rejected(err: AppError) -> HttpError {
    tracing::warn!(error = %err, "rejected document update");
    HttpError::bad_request(err)
}

async fn run_blocking<T, F>(task: F) -> todo_app::Result<T>
where
    F: FnOnce() -> todo_app::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| AppError::Message(format!("document task failed: {err}")))?
}
