//! Error types for the apiary store and its key-value backends.

use std::fmt;

/// Errors raised by a [`KvStore`](crate::KvStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("{key}: I/O error: {message}")]
    Io { key: String, message: String },

    #[error("{key}: corrupted payload: {message}")]
    Corrupt { key: String, message: String },
}

/// Errors raised while persisting the apiary store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Kv(#[from] KvError),

    #[error("{key}: serialization error: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A keyword did not name any variant of a categorical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeywordError {
    kind: &'static str,
    value: String,
}

impl ParseKeywordError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseKeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseKeywordError {}
