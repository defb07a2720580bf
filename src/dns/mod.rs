//! DNS Resolution Module
//!
//! Provides non-blocking name resolution over [`InetAddress`](crate::address::InetAddress):
//! - [`InetResolver`]: `hostname`, `aliases`, `find`, `find_all` and their
//!   family-filtered variants
//! - System resolver (getaddrinfo via thread pool)
//! - Async hickory-dns resolver (DoH/DoT capable)
//! - Hostname-to-IP override mechanism
//!
//! # Architecture
//!
//! This module mirrors Chromium's `HostResolver` concept but with a cleaner
//! Rust-idiomatic design. The `Resolve` trait is the boundary to the lookup
//! service and allows different implementations to be used interchangeably;
//! `InetResolver` layers literal short-circuiting, query validation and
//! family filtering on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use inetaddr::dns::{Backend, DnsConfig, InetResolver};
//!
//! let resolver = InetResolver::from_config(&DnsConfig::new().backend(Backend::Hickory));
//! for addr in resolver.find_all("example.com").await? {
//!     println!("Resolved: {}", addr);
//! }
//! ```

mod config;
mod gai;
mod hickory;
mod hosts;
mod lookup;
mod resolve;

pub use config::{Backend, DnsConfig};
pub use gai::{GaiResolver, DEFAULT_HOSTS_FILE};
pub use hickory::HickoryResolver;
pub use lookup::{InetResolver, Lookup};
pub use resolve::{Addrs, DnsResolverWithOverrides, HostEntry, Name, Resolve, Resolving, Reversing};
