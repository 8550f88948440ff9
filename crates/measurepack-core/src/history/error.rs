use thiserror::Error;

/// Errors returned by history stores.
///
/// # Examples
/// ```
/// use measurepack_core::HistoryError;
///
/// let err = HistoryError::from(std::io::Error::other("disk full"));
/// assert!(err.to_string().contains("disk full"));
/// ```
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
