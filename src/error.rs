use crate::infrastructure::http::HttpError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Process exit code reported by the command line tool
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Unauthorized(_) => 3,
            Self::ExternalService(_) => 4,
            Self::Internal(_) => 1,
        }
    }
}

impl From<HttpError> for AppError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status { .. } if err.is_unauthorized() => {
                AppError::Unauthorized(err.to_string())
            }
            HttpError::Status { .. } | HttpError::Network(_) => {
                AppError::ExternalService(err.to_string())
            }
            HttpError::Encode(_) | HttpError::Decode(_) => AppError::Internal(err.to_string()),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
