//! Error types for structural conversion and serialization.

use thiserror::Error;

/// Errors raised while converting maps to and from external formats.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The requested format has no codec in this build
    #[error("No codec available for {codec}")]
    MissingCodec { codec: String },

    /// Input could not be decoded into a map
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A map could not be encoded
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },
}

impl ConvertError {
    /// Create a `MalformedInput` error from any displayable cause
    pub fn malformed(reason: impl ToString) -> Self {
        ConvertError::MalformedInput {
            reason: reason.to_string(),
        }
    }

    /// Check if this error reports an unavailable codec
    pub fn is_codec_error(&self) -> bool {
        matches!(self, ConvertError::MissingCodec { .. })
    }

    /// Check if this error reports undecodable input
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ConvertError::MalformedInput { .. })
    }

    /// Check if this error reports an encoding failure
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, ConvertError::SerializationFailed { .. })
    }
}

impl From<ConvertError> for crate::Error {
    fn from(err: ConvertError) -> Self {
        crate::Error::Convert(err)
    }
}
