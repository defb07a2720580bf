//! Forward and reverse lookups over [`InetAddress`].
//!
//! [`InetResolver`] is the caller-facing side of resolution. Every operation
//! returns a [`Lookup`] future that completes exactly once; no failure is
//! reported synchronously. Numeric literals are answered without consulting
//! the lookup service.
//!
//! There is no cache, no request coalescing and no retry. Deadlines are the
//! caller's business:
//!
//! ```rust,ignore
//! let addr = tokio::time::timeout(Duration::from_secs(2), resolver.find("example.com")).await??;
//! ```

use super::{config::DnsConfig, GaiResolver, Name, Resolve};
use crate::address::{parse_numerical, Family, InetAddress};
use crate::base::neterror::NetError;
use std::{fmt, future::Future, pin::Pin, sync::Arc};

/// Longest host name accepted, excluding a trailing root dot (RFC 1035).
const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Alias for the `Future` type returned by [`InetResolver`] operations.
pub type Lookup<T> = Pin<Box<dyn Future<Output = Result<T, NetError>> + Send>>;

/// Asynchronous name resolution producing [`InetAddress`] values.
///
/// Cheap to clone; clones share the lookup service. Concurrent calls are
/// independent of each other.
///
/// # Example
///
/// ```rust,ignore
/// use inetaddr::address::Family;
/// use inetaddr::dns::InetResolver;
///
/// let resolver = InetResolver::system();
/// let v6 = resolver.find_family("example.com", Family::Inet6).await?;
/// let name = resolver.hostname(v6).await?;
/// ```
#[derive(Clone)]
pub struct InetResolver {
    service: Arc<dyn Resolve>,
}

impl InetResolver {
    /// Wraps a lookup service.
    pub fn new(service: Arc<dyn Resolve>) -> Self {
        Self { service }
    }

    /// getaddrinfo-backed resolver with default settings.
    pub fn system() -> Self {
        Self::new(Arc::new(GaiResolver::new()))
    }

    /// Resolver built from `config`.
    pub fn from_config(config: &DnsConfig) -> Self {
        Self::new(config.build())
    }

    /// Primary name registered for `addr`.
    ///
    /// Fails with [`NetError::HostNotFound`] when the service has no record.
    pub fn hostname(&self, addr: InetAddress) -> Lookup<String> {
        let service = self.service.clone();
        Box::pin(async move { Ok(service.reverse(addr).await?.name) })
    }

    /// Every other name registered for `addr`. An address with only a
    /// primary name yields an empty list.
    pub fn aliases(&self, addr: InetAddress) -> Lookup<Vec<String>> {
        let service = self.service.clone();
        Box::pin(async move { Ok(service.reverse(addr).await?.aliases) })
    }

    /// First address for `text`, in service order.
    pub fn find(&self, text: &str) -> Lookup<InetAddress> {
        self.first(text, None)
    }

    /// First address of `family` for `text`, in service order.
    ///
    /// A numeric literal of the other family fails with
    /// [`NetError::HostNotFound`]; it is never retried as a name.
    pub fn find_family(&self, text: &str, family: Family) -> Lookup<InetAddress> {
        self.first(text, Some(family))
    }

    /// Every address for `text`, in service order.
    pub fn find_all(&self, text: &str) -> Lookup<Vec<InetAddress>> {
        self.all(text, None)
    }

    /// Every address of `family` for `text`, in service order.
    pub fn find_all_family(&self, text: &str, family: Family) -> Lookup<Vec<InetAddress>> {
        self.all(text, Some(family))
    }

    fn first(&self, text: &str, family: Option<Family>) -> Lookup<InetAddress> {
        let query = text.to_owned();
        let all = self.all(text, family);
        Box::pin(async move {
            all.await?
                .into_iter()
                .next()
                .ok_or_else(|| NetError::host_not_found(query))
        })
    }

    fn all(&self, text: &str, family: Option<Family>) -> Lookup<Vec<InetAddress>> {
        let query = text.to_owned();
        let service = self.service.clone();
        Box::pin(async move {
            if let Some(addr) = parse_numerical(&query) {
                tracing::debug!(query = %query, "numeric literal, skipping resolution");
                return if in_family(&addr, family) {
                    Ok(vec![addr])
                } else {
                    Err(NetError::host_not_found(query))
                };
            }

            check_query(&query)?;

            let addrs: Vec<InetAddress> = service
                .resolve(Name::new(query.as_str()))
                .await?
                .filter(|addr| in_family(addr, family))
                .collect();

            if addrs.is_empty() {
                tracing::debug!(query = %query, family = ?family, "no address of requested family");
                return Err(NetError::host_not_found(query));
            }
            Ok(addrs)
        })
    }
}

impl fmt::Debug for InetResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InetResolver").finish_non_exhaustive()
    }
}

fn in_family(addr: &InetAddress, family: Option<Family>) -> bool {
    match family {
        Some(family) => addr.family() == family,
        None => true,
    }
}

/// Rejects queries no lookup service could answer.
fn check_query(query: &str) -> Result<(), NetError> {
    let reject = |reason| Err(NetError::invalid_argument(query, reason));

    if query.trim().is_empty() {
        return reject("empty host name");
    }
    if query.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return reject("host name contains whitespace or control characters");
    }
    let name = query.strip_suffix('.').unwrap_or(query);
    if name.len() > MAX_NAME_LEN {
        return reject("host name too long");
    }
    for label in name.split('.') {
        if label.is_empty() {
            return reject("empty label");
        }
        if label.len() > MAX_LABEL_LEN {
            return reject("label too long");
        }
    }
    Ok(())
}
