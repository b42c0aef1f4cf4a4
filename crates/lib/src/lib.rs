//!
//! dotdict: a map with attribute-style access and dotted path addressing.
//!
//! ## Core Concepts
//!
//! * **Maps (`dict::ObjDict`)**: Insertion-ordered maps whose text keys may address nested
//!   containers with dots (`"db.primary.host"`). Attribute-style helpers (`attr`, `set_attr`)
//!   always treat names literally.
//! * **Values (`dict::Value`)**: Scalars, dates, lists, nested maps, plain mappings, and shared
//!   objects reachable through the `dict::Indexable` trait.
//! * **Options (`dict::DictOptions`)**: Per-tree behavior such as literal (no-dots) keys, a
//!   missing-key hook, and reserved attribute names.
//! * **Conversion (`convert`)**: Normalizing nested mappings, JSON projection and parsing,
//!   compressed and URL-safe encodings, and JSON file persistence.
//! * **Merge (`merge`)**: Deep merge where `null` in an overlay deletes.
//! * **Typed extraction (`dict::Typed`)**: Lenient coercion of stored values with defaults.

pub mod convert;
pub mod date;
pub mod dict;
pub mod merge;

pub use dict::{Key, ObjDict, Value};

/// Result type used throughout the dotdict library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotdict library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured lookup and mutation errors from the dict module
    #[error(transparent)]
    Dict(dict::DictError),

    /// Structured conversion errors from the convert module
    #[error(transparent)]
    Convert(convert::ConvertError),

    /// Date parsing errors from the date module
    #[error(transparent)]
    Date(date::DateParseError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Dict(_) => "dict",
            Error::Convert(_) => "convert",
            Error::Date(_) => "date",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key or attribute was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Dict(dict_err) => dict_err.is_not_found_error() || dict_err.is_attribute_error(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error reports a path through a value without member access.
    pub fn is_not_indexable(&self) -> bool {
        match self {
            Error::Dict(dict_err) => dict_err.is_not_indexable(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error reports input that could not be decoded.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Error::Convert(convert_err) => convert_err.is_malformed_input(),
            Error::Serialize(_) | Error::Date(_) => true,
            _ => false,
        }
    }

    /// Returns the key named by a lookup error, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Dict(dict_err) => dict_err.key(),
            _ => None,
        }
    }
}
