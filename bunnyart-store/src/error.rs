use serde::{Deserialize, Serialize};

/// Unified error type for the remote store clients.
///
/// Each variant carries an `endpoint` field identifying which collaborator
/// produced the error ("media" or "news"). All variants are serializable for
/// structured error reporting.
///
/// The consumers of this crate treat every variant identically (a failed
/// call is logged and the local state is left unchanged), so the split into
/// variants exists for diagnostics, not for control flow. In particular,
/// client and server error statuses are collapsed into a single
/// [`Status`](Self::Status) variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum StoreError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    Network {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The call completed with a non-success status.
    Status {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// Failed to decode the endpoint's JSON response.
    Parse {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the decode failure.
        detail: String,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Status { endpoint, status } => {
                write!(f, "[{endpoint}] Unexpected status: HTTP {status}")
            }
            Self::Parse { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Convenience type alias for `Result<T, StoreError>`.
pub type Result<T> = std::result::Result<T, StoreError>;
