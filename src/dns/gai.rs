//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native DNS resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async runtime.
//! Reverse lookups read the hosts file on the same pool.
//!
//! # When to Use
//!
//! - When you need to respect system DNS configuration (/etc/resolv.conf, etc.)
//! - When DoH/DoT is not required
//! - As a fallback when hickory-dns is not available

use super::{hosts, Addrs, HostEntry, Name, Resolve, Resolving, Reversing};
use crate::address::InetAddress;
use crate::base::{context::IoResultExt, neterror::NetError};
use std::{
    net::ToSocketAddrs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Default hosts file consulted for reverse lookups.
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait and
/// executes resolution in `tokio::task::spawn_blocking` to avoid blocking
/// the async runtime.
///
/// # Performance
///
/// Each resolution spawns a blocking task. For high-throughput scenarios,
/// consider using `HickoryResolver` which is fully async.
#[derive(Clone, Debug)]
pub struct GaiResolver {
    hosts_file: Arc<Path>,
}

impl GaiResolver {
    /// Creates a new `GaiResolver` reading reverse entries from `/etc/hosts`.
    pub fn new() -> Self {
        Self::with_hosts_file(DEFAULT_HOSTS_FILE)
    }

    /// Creates a resolver whose reverse lookups read `path`.
    pub fn with_hosts_file(path: impl Into<PathBuf>) -> Self {
        Self {
            hosts_file: Arc::from(path.into()),
        }
    }

    /// The hosts file used for reverse lookups.
    pub fn hosts_file(&self) -> &Path {
        &self.hosts_file
    }
}

impl Default for GaiResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.map(InetAddress::from).collect::<Vec<_>>())
            })
            .await;

            // Handle task join error (cancellation, panic)
            let addrs = result
                .map_err(|e| {
                    tracing::error!(error = %e, "DNS resolution task failed");
                    NetError::transient(domain.as_str(), e)
                })?
                .dns_context(&domain)
                .inspect_err(|e| {
                    tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
                })?;

            if addrs.is_empty() {
                return Err(NetError::host_not_found(domain));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }

    fn reverse(&self, addr: InetAddress) -> Reversing {
        let path = self.hosts_file.clone();
        Box::pin(async move {
            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(addr = %addr, path = %path.display(), "reverse lookup via hosts file");
                std::fs::read_to_string(&path)
            })
            .await;

            let contents = result
                .map_err(|e| {
                    tracing::error!(error = %e, "reverse lookup task failed");
                    NetError::transient(addr.to_string(), e)
                })?
                .map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => NetError::host_not_found(addr.to_string()),
                    _ => {
                        tracing::warn!(error = %e, "hosts file unreadable");
                        NetError::transient(addr.to_string(), e)
                    }
                })?;

            let entry: HostEntry = hosts::reverse_lookup(&contents, &addr)
                .ok_or_else(|| NetError::host_not_found(addr.to_string()))?;

            tracing::debug!(addr = %addr, name = %entry.name, aliases = entry.aliases.len(), "reverse lookup complete");
            Ok(entry)
        })
    }
}
