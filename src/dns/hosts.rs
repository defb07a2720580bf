//! Hosts file (`/etc/hosts` format) lookups.
//!
//! Backs reverse resolution for [`GaiResolver`](super::GaiResolver), since
//! the standard library exposes no `getnameinfo`.

use super::resolve::HostEntry;
use crate::address::{parse_numerical, InetAddress};
use std::net::IpAddr;

/// Collects every name registered for `addr`, in file order.
///
/// Addresses are compared without their zone, as the hosts file has no
/// reliable way to express one; a `%zone` suffix on a line, numeric or
/// symbolic, is dropped before parsing. An IPv4-mapped IPv6 address
/// matches its IPv4 form and the other way round. Lines whose address is
/// not a numeric literal are skipped.
pub(crate) fn reverse_lookup(contents: &str, addr: &InetAddress) -> Option<HostEntry> {
    let wanted = unmapped(addr.ip());
    let names = contents
        .lines()
        .filter_map(|line| {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let literal = fields.next()?.split('%').next()?;
            let entry = parse_numerical(literal)?;
            (unmapped(entry.ip()) == wanted).then_some(fields)
        })
        .flatten()
        .map(str::to_owned);

    HostEntry::from_names(names)
}

fn unmapped(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(ip, IpAddr::V4),
        IpAddr::V4(_) => ip,
    }
}
