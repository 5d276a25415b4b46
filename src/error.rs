use thiserror::Error;

/// Errors from start-up: loading configuration and opening the window.
///
/// Painting itself never fails; out-of-range input is ignored.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),
}

/// Result type for start-up operations
pub type PaintResult<T> = Result<T, PaintError>;
