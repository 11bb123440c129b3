use thirtyfour::error::WebDriverError;

#[derive(Debug, thiserror::Error)]
#[error("browser error: {message}")]
pub struct BrowserError {
    pub message: String,
}

impl BrowserError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<WebDriverError> for BrowserError {
    fn from(value: WebDriverError) -> Self {
        Self::new(value.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("navigation menu not found on {url}: {reason}")]
    Navigation { url: String, reason: String },
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error("persistence failed: {0}")]
    Persistence(#[from] sqlx::Error),
    #[error("invalid persistence target: {0:?}")]
    InvalidTarget(String),
    #[error("failed to encode column: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write checkpoint: {0}")]
    Checkpoint(#[from] csv::Error),
}
