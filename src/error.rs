//! # Error Types
//!
//! Every fingerprint either comes back fully computed or fails with one of
//! these. There is no fallback value.

use thiserror::Error;

/// Result type for hashing operations
pub type HashResult<T> = Result<T, HashError>;

/// Hashing error
#[derive(Debug, Error)]
pub enum HashError {
    /// The native hash binding could not be loaded (missing artifact,
    /// unsupported platform, unresolved symbol).
    #[error("hash primitive unavailable: {reason}")]
    PrimitiveUnavailable { reason: String },

    /// A buffer handed to the pipeline is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Signer configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl HashError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        HashError::PrimitiveUnavailable {
            reason: reason.into(),
        }
    }

    /// True if this error means hashing cannot proceed at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HashError::PrimitiveUnavailable { .. } | HashError::Config(_))
    }
}

impl From<serde_json::Error> for HashError {
    fn from(e: serde_json::Error) -> Self {
        HashError::Config(e.to_string())
    }
}
