use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing nutrition field: {0}")]
    MissingField(String),

    #[error("External service failure: {0}")]
    ExternalService(String),

    #[error("No recipes in catalog")]
    EmptyCatalog,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, DietError>;
