use thiserror::Error;

/// Failures while talking to the persistence backend.
///
/// These are always recoverable from the engine's point of view: local
/// session state is never rolled back or frozen by a failed call, and the
/// caller may retry without redoing prior placements.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend responded with status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("submission must contain exactly 11 players, got {count}")]
    InvalidSubmission { count: usize },
}

impl StoreError {
    /// Whether retrying the same call can reasonably succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Network(_) => true,
            StoreError::Unavailable(_) => true,
            // 4xx means the request itself is wrong; retrying won't help.
            StoreError::Status { code, .. } => *code >= 500,
            StoreError::InvalidSubmission { .. } => false,
        }
    }
}
