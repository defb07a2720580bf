//! Address Module
//!
//! A single value type for IPv4 and IPv6 addresses:
//! - [`InetAddress`]: tagged IPv4/IPv6 payload plus an IPv6 zone index
//! - [`parse_numerical`]: literal-only parsing, never resolves names
//! - [`Family`]: the family discriminator
//!
//! # Example
//!
//! ```rust
//! use inetaddr::address::{parse_numerical, Family};
//!
//! let addr = parse_numerical("::ffff:10.0.0.1").unwrap();
//! assert_eq!(addr.family(), Family::Inet6);
//! assert!(parse_numerical("example.com").is_none());
//! ```

mod family;
mod inetaddress;
mod numeric;

pub use family::Family;
pub use inetaddress::{InetAddress, NO_SCOPE};
pub use numeric::{parse_numerical, parse_numerical_with, NumericZones, ZoneIndex};
