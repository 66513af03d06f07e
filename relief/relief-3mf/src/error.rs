//! Error types for 3MF packaging.

use thiserror::Error;

/// Result type for 3MF packaging operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while packaging a mesh into a 3MF archive.
#[derive(Debug, Error)]
pub enum PackError {
    /// Model document serialization failed.
    #[error("model serialization failed: {message}")]
    Model {
        /// Description of the failing write.
        message: String,
    },

    /// ZIP container error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error from the underlying sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized model document was not valid UTF-8.
    #[error("string conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl PackError {
    /// Create a model serialization error.
    #[must_use]
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model {
            message: message.into(),
        }
    }
}
