//! Resolver configuration.

use super::gai::DEFAULT_HOSTS_FILE;
use super::{DnsResolverWithOverrides, GaiResolver, HickoryResolver, Resolve};
use crate::address::InetAddress;
use std::{borrow::Cow, collections::HashMap, path::PathBuf, sync::Arc, time::Duration};

/// Which lookup service answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// getaddrinfo on tokio's blocking pool, hosts file for reverse lookups.
    #[default]
    System,
    /// hickory-dns, fully async.
    Hickory,
}

/// DNS resolution configuration.
#[derive(Debug, Clone)]
pub struct DnsConfig {
    /// Lookup service
    pub backend: Backend,
    /// Per-query timeout at the service layer (hickory only)
    pub timeout: Option<Duration>,
    /// Tries per query at the service layer (hickory only)
    pub attempts: Option<usize>,
    /// Hosts file for reverse lookups (system only)
    pub hosts_file: PathBuf,
    /// Static name-to-address answers consulted before the backend
    pub overrides: HashMap<Cow<'static, str>, Vec<InetAddress>>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            backend: Backend::System,
            timeout: None,
            attempts: None,
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
            overrides: HashMap::new(),
        }
    }
}

impl DnsConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup service.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the service-layer query timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the service-layer attempt count.
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = Some(attempts);
        self
    }

    /// Set the hosts file used for reverse lookups.
    pub fn hosts_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.hosts_file = path.into();
        self
    }

    /// Pin `name` to `addrs`, in the given order.
    pub fn override_host(
        mut self,
        name: impl Into<Cow<'static, str>>,
        addrs: Vec<InetAddress>,
    ) -> Self {
        self.overrides.insert(name.into(), addrs);
        self
    }

    /// Build the configured lookup service.
    pub fn build(&self) -> Arc<dyn Resolve> {
        let service: Arc<dyn Resolve> = match self.backend {
            Backend::System => Arc::new(GaiResolver::with_hosts_file(self.hosts_file.clone())),
            Backend::Hickory => match (self.timeout, self.attempts) {
                (None, None) => Arc::new(HickoryResolver::new()),
                (timeout, attempts) => Arc::new(HickoryResolver::with_limits(timeout, attempts)),
            },
        };

        if self.overrides.is_empty() {
            service
        } else {
            Arc::new(DnsResolverWithOverrides::new(service, self.overrides.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DnsConfig::default();
        assert_eq!(config.backend, Backend::System);
        assert_eq!(config.timeout, None);
        assert_eq!(config.hosts_file, PathBuf::from("/etc/hosts"));
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DnsConfig::new()
            .backend(Backend::Hickory)
            .timeout(Duration::from_secs(3))
            .attempts(1)
            .override_host("db.local", vec!["10.0.0.2".parse().unwrap()]);

        assert_eq!(config.backend, Backend::Hickory);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.attempts, Some(1));
        assert_eq!(config.overrides.len(), 1);
    }

    #[tokio::test]
    async fn test_build_with_overrides() {
        let service = DnsConfig::new()
            .override_host("db.local", vec!["10.0.0.2".parse().unwrap()])
            .build();

        let addrs: Vec<_> = service
            .resolve("db.local".into())
            .await
            .unwrap()
            .collect();
        assert_eq!(addrs, vec!["10.0.0.2".parse::<InetAddress>().unwrap()]);
    }
}
