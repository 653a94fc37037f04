use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_app::{ApiError, AppError};

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ApiError,
}

impl HttpError {
    pub fn with_status(status: StatusCode, err: AppError) -> Self {
        Self {
            status,
            body: ApiError::from(err),
        }
    }

    pub fn internal(err: AppError) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request(err: AppError) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, err)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.body.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
