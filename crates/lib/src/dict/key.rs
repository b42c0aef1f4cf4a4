//! Keys for [`ObjDict`](super::ObjDict) entries.
//!
//! Keys are ordered, hashable scalars. Only [`Key::Text`] keys containing the
//! path separator are ever interpreted as dotted paths; integer keys are always
//! literal.

use std::fmt;

/// Separator between path components in a dotted key.
pub const SEPARATOR: char = '.';

/// A map key: text or integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// Text key
    Text(String),
}

impl Key {
    /// Returns the key as text if it is a text key.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Returns true for text keys containing the path separator.
    pub fn is_dotted(&self) -> bool {
        matches!(self, Key::Text(s) if s.contains(SEPARATOR))
    }

    /// Returns the key as an owned string, rendering integers in decimal.
    ///
    /// This is the form keys take in JSON output.
    pub fn to_text(&self) -> String {
        match self {
            Key::Text(s) => s.clone(),
            Key::Int(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => write!(f, "{s}"),
            Key::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Key::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
