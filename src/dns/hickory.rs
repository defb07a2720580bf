//! Async DNS resolver using hickory-dns.
//!
//! This resolver provides fully async DNS resolution with support for:
//! - DNS-over-HTTPS (DoH)
//! - DNS-over-TLS (DoT)
//! - System DNS configuration auto-detection
//! - PTR-based reverse lookups
//!
//! # Performance
//!
//! Unlike `GaiResolver`, this resolver is fully async and doesn't require
//! spawning blocking tasks. It maintains connection pools to DNS servers
//! for better performance under load.

use super::{Addrs, HostEntry, Name, Resolve, Resolving, Reversing};
use crate::address::InetAddress;
use crate::base::neterror::NetError;
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    ResolveError, TokioResolver,
};
use std::{fmt, sync::LazyLock, time::Duration};

/// Async DNS resolver backed by hickory-dns.
///
/// [`HickoryResolver::new`] shares one lazily initialized resolver across
/// all instances via a static `LazyLock`. It automatically configures
/// itself based on the system's DNS settings.
///
/// # Features
///
/// - Fully async (no blocking threads)
/// - Automatic system configuration detection
/// - IPv4 and IPv6 dual-stack resolution
/// - Connection pooling to DNS servers
///
/// # Example
///
/// ```rust,ignore
/// use inetaddr::dns::{HickoryResolver, Name, Resolve};
///
/// let resolver = HickoryResolver::new();
/// let addrs = resolver.resolve(Name::new("example.com")).await?;
/// ```
#[derive(Clone)]
pub struct HickoryResolver {
    resolver: TokioResolver,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver` with hickory's default timeouts.
    ///
    /// The underlying resolver is lazily initialized on first use.
    /// It will attempt to read system DNS configuration; if that fails,
    /// it falls back to sensible defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| build(None, None));

        Self {
            resolver: RESOLVER.clone(),
        }
    }

    /// Creates a dedicated resolver with service-level limits.
    ///
    /// `timeout` bounds each query to a name server and `attempts` is the
    /// number of tries hickory makes before reporting a failure. Either
    /// left as `None` keeps hickory's default.
    pub fn with_limits(timeout: Option<Duration>, attempts: Option<usize>) -> Self {
        Self {
            resolver: build(timeout, attempts),
        }
    }
}

fn build(timeout: Option<Duration>, attempts: Option<usize>) -> TokioResolver {
    let mut builder = match TokioResolver::builder_tokio() {
        Ok(builder) => {
            tracing::debug!("Using system DNS configuration");
            builder
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to read system DNS config, using defaults"
            );
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        }
    };

    let options = builder.options_mut();
    // Both families are needed so callers can filter by family.
    options.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    if let Some(timeout) = timeout {
        options.timeout = timeout;
    }
    if let Some(attempts) = attempts {
        options.attempts = attempts;
    }

    builder.build()
}

impl fmt::Debug for HickoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HickoryResolver").finish_non_exhaustive()
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// NXDOMAIN and empty answers mean the name has no record; everything else
/// (timeouts, SERVFAIL, unreachable servers) may succeed later.
fn classify(query: &str, err: &ResolveError) -> NetError {
    if err.is_nx_domain() || err.is_no_records_found() {
        NetError::host_not_found(query)
    } else {
        NetError::transient(query, err)
    }
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let domain = name.as_str();
            tracing::debug!(domain = %domain, "resolving via hickory-dns");

            let lookup = resolver.resolver.lookup_ip(domain).await.map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "hickory-dns lookup failed");
                classify(domain, &e)
            })?;

            let addrs: Vec<InetAddress> = lookup.iter().map(InetAddress::from).collect();

            if addrs.is_empty() {
                return Err(NetError::host_not_found(domain));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }

    fn reverse(&self, addr: InetAddress) -> Reversing {
        let resolver = self.clone();
        Box::pin(async move {
            let query = addr.to_string();
            tracing::debug!(addr = %query, "reverse lookup via hickory-dns");

            // PTR queries carry no zone.
            let lookup = resolver.resolver.reverse_lookup(addr.ip()).await.map_err(|e| {
                tracing::debug!(addr = %query, error = %e, "hickory-dns reverse lookup failed");
                classify(&query, &e)
            })?;

            let names = lookup
                .iter()
                .map(|ptr| ptr.to_string().trim_end_matches('.').to_string());
            let entry =
                HostEntry::from_names(names).ok_or_else(|| NetError::host_not_found(&query))?;

            tracing::debug!(addr = %query, name = %entry.name, "hickory-dns reverse lookup complete");
            Ok(entry)
        })
    }
}
