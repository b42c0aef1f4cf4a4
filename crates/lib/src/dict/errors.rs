//! Error types for map access and path traversal.
//!
//! This module defines the structured errors produced by item access, dotted
//! path traversal and the attribute-style surface of [`ObjDict`](super::ObjDict).

use thiserror::Error;

/// Structured error types for map operations.
///
/// Traversal errors always name the specific failing token rather than the
/// full dotted path that was requested.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictError {
    /// A key or path token is absent at some traversal level
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// An intermediate value does not support member access
    #[error("cannot look up '{key}' in a {found} value")]
    NotIndexable { key: String, found: String },

    /// A dotted-path operation was invoked with a key that has no separator
    #[error("invalid path: {path}")]
    InvalidPath { path: String },

    /// Attribute-style lookup of a reserved or absent name
    #[error("no attribute '{name}'")]
    AttributeNotFound { name: String },

    /// A value exists but has a different type than requested
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl DictError {
    /// Builds a `KeyNotFound` for the given key or token.
    pub fn key_not_found(key: impl ToString) -> Self {
        DictError::KeyNotFound {
            key: key.to_string(),
        }
    }

    /// Check if this error is a missing key or token
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, DictError::KeyNotFound { .. })
    }

    /// Check if this error is an attribute-style lookup failure
    pub fn is_attribute_error(&self) -> bool {
        matches!(self, DictError::AttributeNotFound { .. })
    }

    /// Check if this error is caused by traversing through a non-container
    pub fn is_not_indexable(&self) -> bool {
        matches!(self, DictError::NotIndexable { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, DictError::TypeMismatch { .. })
    }

    /// Get the failing key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            DictError::KeyNotFound { key } | DictError::NotIndexable { key, .. } => Some(key),
            DictError::AttributeNotFound { name } => Some(name),
            DictError::InvalidPath { .. } | DictError::TypeMismatch { .. } => None,
        }
    }
}

// Conversion from DictError to the main Error type
impl From<DictError> for crate::Error {
    fn from(err: DictError) -> Self {
        crate::Error::Dict(err)
    }
}
