use thiserror::Error;

use crate::app::services::api::ServiceError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("No {list} entry at index {index} (list has {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_service_error_is_transparent() {
        let err: AppError = ServiceError::Status {
            status: 500,
            detail: None,
        }
        .into();
        assert_eq!(err.to_string(), "Server error: 500");

        let err: AppError = ServiceError::Transport("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::IndexOutOfRange {
            list: "experience",
            index: 3,
            len: 1,
        };
        assert_eq!(err.to_string(), "No experience entry at index 3 (list has 1)");

        let err = AppError::Settings("invalid api url".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid api url");
    }
}
