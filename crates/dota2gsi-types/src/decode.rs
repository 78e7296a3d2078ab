//! JSON decoding of game state updates.
//!
//! [`decode`] is pure: no I/O and no shared state, so the listener calls it
//! directly from concurrent request handlers.

use serde_json::error::Category;

use crate::snapshot::Snapshot;

/// Errors that can occur when decoding a request body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not JSON (syntax error or truncated input).
    #[error("malformed JSON: {source}")]
    Malformed {
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The body is JSON but does not fit the snapshot schema, e.g. a string
    /// where a number is expected or a non-object top level.
    #[error("schema mismatch: {source}")]
    Schema {
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Short label for structured logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "malformed",
            Self::Schema { .. } => "schema",
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Data => Self::Schema { source },
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed { source },
        }
    }
}

/// Decode a request body into a [`Snapshot`].
///
/// Unknown keys are ignored and missing keys take their zero value. A key
/// holding the wrong JSON type fails the whole decode rather than being
/// coerced.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if `bytes` is not JSON, or
/// [`DecodeError::Schema`] if it is JSON of the wrong shape.
pub fn decode(bytes: &[u8]) -> Result<Snapshot, DecodeError> {
    let snapshot = serde_json::from_slice(bytes)?;
    Ok(snapshot)
}
