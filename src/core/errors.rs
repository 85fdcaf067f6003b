use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashifyError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid JSON syntax: {0}")]
    InvalidSyntax(String),

    #[error("Invalid import format: {0}")]
    InvalidFormat(String),

    #[error("FlashifyError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FlashifyError {
    fn from(error: std::io::Error) -> Self {
        FlashifyError::Io(Box::new(error))
    }
}
