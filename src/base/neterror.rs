use crate::address::Family;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetError {
    // Address Errors
    #[error("Address invalid")]
    AddressInvalid,
    #[error("Address family mismatch: expected {expected}, found {actual}")]
    AddressFamilyMismatch { expected: Family, actual: Family },

    // Resolution Errors
    #[error("Host not found: {query}")]
    HostNotFound { query: String },
    #[error("Invalid resolver argument {query:?}: {reason}")]
    InvalidArgument { query: String, reason: &'static str },
    #[error("Temporary failure resolving {query}: {reason}")]
    TransientFailure { query: String, reason: String },
}

impl NetError {
    pub(crate) fn host_not_found(query: impl Into<String>) -> Self {
        NetError::HostNotFound {
            query: query.into(),
        }
    }

    pub(crate) fn invalid_argument(query: impl Into<String>, reason: &'static str) -> Self {
        NetError::InvalidArgument {
            query: query.into(),
            reason,
        }
    }

    pub(crate) fn transient(query: impl Into<String>, reason: impl ToString) -> Self {
        NetError::TransientFailure {
            query: query.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether repeating the same request may succeed.
    ///
    /// Resolution is never retried internally; this is the hook for
    /// callers that implement their own policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, NetError::TransientFailure { .. })
    }

    /// Chromium `net_error_list.h` code for this error.
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::AddressInvalid => -108,
            NetError::HostNotFound { .. } => -105,
            NetError::InvalidArgument { .. } => -4,
            NetError::TransientFailure { .. } => -802,
            // Custom codes start at -10000, clear of every Chromium range.
            NetError::AddressFamilyMismatch { .. } => -10001,
        }
    }
}
