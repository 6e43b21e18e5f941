use thiserror::Error;

/// Errors reported by window computation and item filtering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    /// An item's start or end cannot be interpreted as an instant,
    /// or its start is after its end
    #[error("invalid timestamp for item '{id}': {reason}")]
    InvalidTimestamp { id: String, reason: String },

    /// The reference date cannot be normalized in the requested timezone
    #[error("invalid window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
