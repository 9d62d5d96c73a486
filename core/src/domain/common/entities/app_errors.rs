use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("File too large. Max size is {0} bytes")]
    FileTooLarge(usize),

    #[error("{0} is not configured")]
    FeatureDisabled(&'static str),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Upload storage error: {0}")]
    UploadStorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}
