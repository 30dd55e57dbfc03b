use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the breaker panel crate.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors surfaced by the expander, renderer and estimator.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("quantity #{index} is not a non-negative integer: `{value}`")]
    InvalidQuantity { index: usize, value: String },
    #[error("expected {expected} quantities (one per catalog entry), got {actual}")]
    QuantityCountMismatch { expected: usize, actual: usize },
    #[error("unknown label mode `{0}` (expected `height` or `width`)")]
    UnknownLabelMode(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
