use thiserror::Error;

/// Fehler eines Remote-Store-Aufrufs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("invalid document id {0:?}")]
    InvalidDocumentId(String),

    #[error("batch of {count} writes exceeds the limit of {max}")]
    BatchTooLarge { count: usize, max: usize },

    #[error("failed to decode store response: {0}")]
    Decode(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
