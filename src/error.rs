//! Error types for WIMSTAY.

use thiserror::Error;

/// Common error type for WIMSTAY.
///
/// Mail transport failures have their own type ([`crate::mail::MailError`])
/// and map straight to the web layer's `ApiError`; this covers the rest.
#[derive(Error, Debug)]
pub enum WimstayError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for WIMSTAY operations.
pub type Result<T> = std::result::Result<T, WimstayError>;
