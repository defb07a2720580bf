//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting IO errors from the system resolver into `NetError` variants.

use crate::base::neterror::NetError;
use std::io;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add DNS resolution context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use inetaddr::base::context::IoResultExt;
    ///
    /// let addrs = ("example.com", 0).to_socket_addrs()
    ///     .dns_context("example.com")?;
    /// // Error: "Host not found: example.com"
    /// ```
    fn dns_context(self, domain: &str) -> Result<T, NetError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn dns_context(self, domain: &str) -> Result<T, NetError> {
        self.map_err(|e| classify_dns_error(domain, &e))
    }
}

/// getaddrinfo failures reach us as opaque `io::Error`s; `EAI_AGAIN` is
/// only recognizable through its message.
fn classify_dns_error(domain: &str, err: &io::Error) -> NetError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => {
            NetError::transient(domain, err)
        }
        io::ErrorKind::InvalidInput => NetError::invalid_argument(domain, "rejected by resolver"),
        _ if err.to_string().contains("Temporary failure") => NetError::transient(domain, err),
        _ => NetError::host_not_found(domain),
    }
}
