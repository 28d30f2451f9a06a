use thiserror::Error;

#[derive(Debug, Error)]
pub enum KtpError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Input error: {0}")]
    InputError(String),
}
