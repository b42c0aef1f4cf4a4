//! Subcommand implementations.

pub mod codec;
pub mod edit;
pub mod read;

use dotdict::Value;

/// Parses a command-line value as JSON, falling back to plain text
pub fn parse_value(text: &str) -> Value {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "value is not JSON, storing as text");
            Value::from(text)
        }
    }
}
