#[derive(Debug, thiserror::Error)]
pub enum DermError {
    #[error("Invalid image data: {0}")]
    InvalidImage(String),
    #[error("classification failed: {0}")]
    Classification(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DermError {
    /// Whether the error was caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DermError::InvalidImage(_))
    }
}

pub type DermResult<T> = std::result::Result<T, DermError>;
