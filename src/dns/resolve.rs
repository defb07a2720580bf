//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the boundary to the lookup service.

use crate::address::InetAddress;
use crate::base::neterror::NetError;
use std::{borrow::Cow, collections::HashMap, fmt, future::Future, pin::Pin, sync::Arc};

/// A domain name to resolve into IP addresses.
///
/// This is a lightweight wrapper around a hostname string that provides
/// a type-safe way to pass domain names to resolvers.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    /// Creates a new [`Name`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the hostname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Result of a reverse lookup: the primary name and every other name
/// registered for the address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostEntry {
    pub name: String,
    pub aliases: Vec<String>,
}

impl HostEntry {
    /// Builds an entry from names in service order. The first becomes the
    /// primary name; `None` when `names` is empty.
    pub fn from_names<I>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut names = names.into_iter();
        let name = names.next()?;
        let mut aliases: Vec<String> = Vec::new();
        for alias in names {
            if alias != name && !aliases.contains(&alias) {
                aliases.push(alias);
            }
        }
        Some(Self { name, aliases })
    }
}

/// Alias for an `Iterator` trait object over resolved addresses.
pub type Addrs = Box<dyn Iterator<Item = InetAddress> + Send>;

/// Alias for the `Future` type returned by a forward lookup.
pub type Resolving = Pin<Box<dyn Future<Output = Result<Addrs, NetError>> + Send>>;

/// Alias for the `Future` type returned by a reverse lookup.
pub type Reversing = Pin<Box<dyn Future<Output = Result<HostEntry, NetError>> + Send>>;

/// Trait for the lookup service behind [`InetResolver`](super::InetResolver).
///
/// Implementations must be thread-safe and must not block the calling
/// thread; blocking lookups belong on a worker pool.
///
/// # Design Notes
///
/// - Addresses are yielded in service order; callers never reorder them.
/// - Uses `&self` for concurrent resolution without mutable access.
/// - Returns boxed futures for trait object compatibility.
pub trait Resolve: Send + Sync {
    /// Resolves a domain name to addresses.
    fn resolve(&self, name: Name) -> Resolving;

    /// Looks up the names registered for `addr`.
    fn reverse(&self, addr: InetAddress) -> Reversing;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, name: Name) -> Resolving {
        (**self).resolve(name)
    }

    fn reverse(&self, addr: InetAddress) -> Reversing {
        (**self).reverse(addr)
    }
}

/// DNS resolver wrapper that supports hostname overrides.
///
/// This resolver first checks a map of hostname-to-address overrides before
/// falling back to the underlying resolver. Reverse lookups are answered
/// from the same map when an override lists the address. Useful for:
/// - Testing without real DNS
/// - Forcing specific IPs for certain domains
/// - Local development with custom hostnames
///
/// # Example
///
/// ```rust,ignore
/// use inetaddr::dns::{DnsResolverWithOverrides, GaiResolver};
/// use std::collections::HashMap;
///
/// let mut overrides = HashMap::new();
/// overrides.insert("api.local".into(), vec!["127.0.0.1".parse().unwrap()]);
///
/// let resolver = DnsResolverWithOverrides::new(Arc::new(GaiResolver::new()), overrides);
/// ```
pub struct DnsResolverWithOverrides {
    inner: Arc<dyn Resolve>,
    overrides: Arc<HashMap<Cow<'static, str>, Vec<InetAddress>>>,
}

impl DnsResolverWithOverrides {
    /// Creates a new resolver with the given overrides.
    ///
    /// # Arguments
    ///
    /// * `inner` - The fallback resolver for non-overridden hostnames.
    /// * `overrides` - Map of hostnames to their resolved addresses.
    pub fn new(
        inner: Arc<dyn Resolve>,
        overrides: HashMap<Cow<'static, str>, Vec<InetAddress>>,
    ) -> Self {
        Self {
            inner,
            overrides: Arc::new(overrides),
        }
    }

    /// Returns the number of configured overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn reverse_override(&self, addr: &InetAddress) -> Option<HostEntry> {
        let mut names: Vec<String> = self
            .overrides
            .iter()
            .filter(|(_, addrs)| addrs.contains(addr))
            .map(|(name, _)| name.to_string())
            .collect();
        // HashMap order is arbitrary; keep the primary name stable.
        names.sort();
        HostEntry::from_names(names)
    }
}

impl Resolve for DnsResolverWithOverrides {
    fn resolve(&self, name: Name) -> Resolving {
        // Check overrides first
        if let Some(addrs) = self.overrides.get(name.as_str()) {
            let addrs: Addrs = Box::new(addrs.clone().into_iter());
            return Box::pin(std::future::ready(Ok(addrs)));
        }
        // Fall back to inner resolver
        self.inner.resolve(name)
    }

    fn reverse(&self, addr: InetAddress) -> Reversing {
        if let Some(entry) = self.reverse_override(&addr) {
            return Box::pin(std::future::ready(Ok(entry)));
        }
        self.inner.reverse(addr)
    }
}

impl fmt::Debug for DnsResolverWithOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsResolverWithOverrides")
            .field("override_count", &self.overrides.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_name_from_str() {
        let name = Name::from("example.com");
        assert_eq!(name.as_str(), "example.com");
        assert_eq!(name.to_string(), "example.com");
    }

    #[test]
    fn test_name_equality() {
        let name1 = Name::new("example.com");
        let name2 = Name::new("example.com");
        let name3 = Name::new("other.com");

        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    #[test]
    fn test_host_entry_from_names() {
        let entry = HostEntry::from_names(vec![
            "host.example".to_string(),
            "www.example".to_string(),
            "host.example".to_string(),
            "www.example".to_string(),
        ])
        .unwrap();
        assert_eq!(entry.name, "host.example");
        assert_eq!(entry.aliases, vec!["www.example".to_string()]);

        assert!(HostEntry::from_names(Vec::new()).is_none());
    }

    struct MockResolver {
        response: Vec<InetAddress>,
    }

    impl Resolve for MockResolver {
        fn resolve(&self, _name: Name) -> Resolving {
            let addrs = self.response.clone();
            Box::pin(async move { Ok(Box::new(addrs.into_iter()) as Addrs) })
        }

        fn reverse(&self, addr: InetAddress) -> Reversing {
            Box::pin(async move { Err(NetError::host_not_found(addr.to_string())) })
        }
    }

    fn v4(a: u8, b: u8, c: u8, d: u8) -> InetAddress {
        InetAddress::from(Ipv4Addr::new(a, b, c, d))
    }

    #[tokio::test]
    async fn test_override_resolver_hit() {
        let mock = Arc::new(MockResolver {
            response: vec![v4(8, 8, 8, 8)],
        });

        let mut overrides = HashMap::new();
        overrides.insert(Cow::Borrowed("override.local"), vec![v4(127, 0, 0, 1)]);

        let resolver = DnsResolverWithOverrides::new(mock, overrides);
        let addrs: Vec<_> = resolver
            .resolve(Name::new("override.local"))
            .await
            .unwrap()
            .collect();

        assert_eq!(addrs, vec![v4(127, 0, 0, 1)]);
    }

    #[tokio::test]
    async fn test_override_resolver_miss() {
        let mock = Arc::new(MockResolver {
            response: vec![v4(8, 8, 8, 8)],
        });

        let resolver = DnsResolverWithOverrides::new(mock, HashMap::new());

        let addrs: Vec<_> = resolver
            .resolve(Name::new("not-overridden.com"))
            .await
            .unwrap()
            .collect();

        assert_eq!(addrs, vec![v4(8, 8, 8, 8)]);
    }

    #[tokio::test]
    async fn test_override_reverse() {
        let mock = Arc::new(MockResolver { response: vec![] });

        let mut overrides = HashMap::new();
        overrides.insert(Cow::Borrowed("web.local"), vec![v4(10, 0, 0, 5)]);
        overrides.insert(Cow::Borrowed("api.local"), vec![v4(10, 0, 0, 5)]);
        overrides.insert(Cow::Borrowed("db.local"), vec![v4(10, 0, 0, 6)]);

        let resolver = DnsResolverWithOverrides::new(mock, overrides);

        let entry = resolver.reverse(v4(10, 0, 0, 5)).await.unwrap();
        assert_eq!(entry.name, "api.local");
        assert_eq!(entry.aliases, vec!["web.local".to_string()]);

        let miss = resolver.reverse(v4(10, 0, 0, 7)).await;
        assert!(matches!(miss, Err(NetError::HostNotFound { .. })));
    }
}
