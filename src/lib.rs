//! # inetaddr
//!
//! One address type for both IP families, and non-blocking name resolution
//! built on it.
//!
//! `inetaddr` provides an [`InetAddress`](address::InetAddress) value that
//! holds either a 4-byte IPv4 or a 16-byte IPv6 address (with its zone
//! index) behind a single equality, hashing, parsing and formatting
//! contract, plus an [`InetResolver`](dns::InetResolver) whose forward and
//! reverse lookups complete through futures.
//!
//! ## Features
//!
//! - **Tagged payload**: the bytes of one family are never readable as the other
//! - **Scoped IPv6**: `fe80::1%2` parses, prints and compares with its zone
//! - **Literal parsing**: `parse_numerical` never touches the network
//! - **Pluggable lookups**: getaddrinfo, hickory-dns, or static overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inetaddr::address::{parse_numerical, Family};
//! use inetaddr::dns::InetResolver;
//!
//! #[tokio::main]
//! async fn main() {
//!     let literal = parse_numerical("fe80::1%2").unwrap();
//!     println!("{} scope={}", literal, literal.scope());
//!
//!     let resolver = InetResolver::system();
//!     let addr = resolver.find_family("localhost", Family::Inet).await.unwrap();
//!     println!("localhost -> {}", addr);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`address`] - The address value, its family, and literal parsing
//! - [`base`] - Error definitions and context helpers
//! - [`dns`] - Lookup services and the resolver front end

pub mod address;
pub mod base;
pub mod dns;
