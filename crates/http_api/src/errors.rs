use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleet_app::{ApiError, AppError};

/// JSON error body paired with the status it is sent with.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ApiError,
}

impl HttpError {
    pub fn coded(status: StatusCode, message: impl Into<String>, code: &str) -> Self {
        Self {
            status,
            body: ApiError {
                status: status.as_u16(),
                message: message.into(),
                code: Some(code.to_string()),
            },
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        let body = ApiError::from(err);
        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, body }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
