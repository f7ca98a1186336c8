use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(#[from] fleet_db::DbError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match &err {
            AppError::InvalidInput(_) | AppError::Storage(StorageError::InvalidPath(_)) => {
                (400, Some("invalid_input".to_string()))
            }
            AppError::NotFound(_) | AppError::Storage(StorageError::NotFound(_)) => {
                (404, Some("not_found".to_string()))
            }
            AppError::Db(_)
            | AppError::Storage(StorageError::Io(_))
            | AppError::Io(_)
            | AppError::Serde(_)
            | AppError::Message(_) => (500, None),
        };
        Self {
            status,
            message: err.to_string(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let api: ApiError = AppError::InvalidInput("title is required".to_string()).into();
        assert_eq!(api.status, 400);
        assert_eq!(api.code.as_deref(), Some("invalid_input"));
        assert_eq!(api.message, "title is required");
    }

    #[test]
    fn storage_path_errors_are_client_errors() {
        let api: ApiError = AppError::Storage(StorageError::InvalidPath("../x".to_string())).into();
        assert_eq!(api.status, 400);
        let api: ApiError = AppError::Message("boom".to_string()).into();
        assert_eq!(api.status, 500);
        assert!(api.code.is_none());
    }
}
