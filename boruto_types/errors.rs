use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Errors for request validation on the heroes routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Only numbers allowed")]
    InvalidPageFormat,

    #[error("Heroes not found")]
    PageOutOfRange { page: i32 },
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
