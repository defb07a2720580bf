//! Numeric literal parsing.
//!
//! Turns `a.b.c.d` and colon-hex literals (with an optional `%zone` suffix)
//! into [`InetAddress`] values. Nothing here touches the network.

use super::inetaddress::{InetAddress, NO_SCOPE};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Maps a symbolic zone name (an interface name such as `eth0`) to its
/// numeric index.
pub trait ZoneIndex {
    fn zone_index(&self, zone: &str) -> Option<u32>;
}

/// Accepts numeric zones only; every symbolic zone is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericZones;

impl ZoneIndex for NumericZones {
    fn zone_index(&self, _zone: &str) -> Option<u32> {
        None
    }
}

impl<F> ZoneIndex for F
where
    F: Fn(&str) -> Option<u32>,
{
    fn zone_index(&self, zone: &str) -> Option<u32> {
        self(zone)
    }
}

/// Parses a numeric IPv4 or IPv6 literal.
///
/// Returns `None` for anything that is not a literal, including host names.
/// Only numeric zones are accepted; see [`parse_numerical_with`] for
/// symbolic ones.
pub fn parse_numerical(text: &str) -> Option<InetAddress> {
    parse_numerical_with(text, &NumericZones)
}

/// Like [`parse_numerical`], resolving symbolic zones through `zones`.
pub fn parse_numerical_with<Z>(text: &str, zones: &Z) -> Option<InetAddress>
where
    Z: ZoneIndex + ?Sized,
{
    if let Ok(v4) = text.parse::<Ipv4Addr>() {
        return Some(v4.into());
    }

    let (literal, zone) = match text.split_once('%') {
        Some((literal, zone)) => (literal, Some(zone)),
        None => (text, None),
    };
    let v6 = literal.parse::<Ipv6Addr>().ok()?;
    let scope = match zone {
        Some(zone) => parse_zone(zone, zones)?,
        None => NO_SCOPE,
    };
    Some(InetAddress::v6_scoped(v6, scope))
}

fn parse_zone<Z: ZoneIndex + ?Sized>(zone: &str, zones: &Z) -> Option<u32> {
    if zone.is_empty() {
        return None;
    }
    // All-digit zones that overflow u32 are invalid, not symbolic.
    if zone.bytes().all(|b| b.is_ascii_digit()) {
        return zone.parse().ok();
    }
    zones.zone_index(zone)
}
