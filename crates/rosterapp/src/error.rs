use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Validation(String),

    #[error("A save is already in progress")]
    SaveInProgress,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
