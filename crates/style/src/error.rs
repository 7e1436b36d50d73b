use thiserror::Error;

/// Errors raised while loading or validating presentation settings.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),
}
