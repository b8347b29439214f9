//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use bunnyart_store::StoreError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Input validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Icon name outside the recognized set
    #[error("Unknown icon name: {0}")]
    UnknownIcon(String),

    /// Store error (converted from the client library)
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Whether it is expected behavior (user input etc.), used for log
    /// classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownIcon(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_expected() {
        assert!(CoreError::Validation("title is required".to_string()).is_expected());
    }

    #[test]
    fn store_error_is_not_expected() {
        let e = CoreError::Store(StoreError::Network {
            endpoint: "media".to_string(),
            detail: "connection refused".to_string(),
        });
        assert!(!e.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = CoreError::Validation("bad".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Validation\""));
    }
}
