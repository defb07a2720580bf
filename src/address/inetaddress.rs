//! The `InetAddress` value type.

use super::numeric::parse_numerical;
use super::Family;
use crate::base::neterror::NetError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    str::FromStr,
};

/// Scope value meaning "no zone".
pub const NO_SCOPE: u32 = u32::MAX;

/// An IPv4 or IPv6 address, the latter optionally carrying a zone index.
///
/// The payload is a tagged variant, so the bytes of one family can never be
/// read under the other family's tag. Values are immutable and `Copy`.
///
/// Equality and hashing cover the family, the payload bytes, and for IPv6 the
/// scope: `fe80::1%1` and `fe80::1%2` are different addresses.
///
/// # Example
///
/// ```rust
/// use inetaddr::address::{Family, InetAddress, NO_SCOPE};
///
/// let addr: InetAddress = "fe80::1%3".parse().unwrap();
/// assert_eq!(addr.family(), Family::Inet6);
/// assert_eq!(addr.scope(), 3);
/// assert_eq!(addr.to_string(), "fe80::1%3");
///
/// let v4 = InetAddress::from_octets_v4([10, 0, 0, 1]);
/// assert_eq!(v4.scope(), NO_SCOPE);
/// assert!(v4.as_ipv6().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InetAddress {
    repr: Repr,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr {
    V4([u8; 4]),
    V6([u8; 16], u32),
}

impl Default for InetAddress {
    fn default() -> Self {
        Self::unspecified(Family::Inet)
    }
}

impl InetAddress {
    /// The all-zero address of `family`.
    pub const fn unspecified(family: Family) -> Self {
        match family {
            Family::Inet => Self::from_octets_v4([0; 4]),
            Family::Inet6 => Self::from_octets_v6([0; 16], NO_SCOPE),
        }
    }

    /// Builds an IPv4 address from network-order bytes.
    pub const fn from_octets_v4(octets: [u8; 4]) -> Self {
        Self {
            repr: Repr::V4(octets),
        }
    }

    /// Builds an IPv6 address from network-order bytes. Pass [`NO_SCOPE`]
    /// for an unscoped address.
    pub const fn from_octets_v6(octets: [u8; 16], scope: u32) -> Self {
        Self {
            repr: Repr::V6(octets, scope),
        }
    }

    /// Builds a scoped IPv6 address.
    pub const fn v6_scoped(addr: Ipv6Addr, scope: u32) -> Self {
        Self::from_octets_v6(addr.octets(), scope)
    }

    #[inline]
    pub fn family(&self) -> Family {
        match self.repr {
            Repr::V4(_) => Family::Inet,
            Repr::V6(..) => Family::Inet6,
        }
    }

    #[inline]
    pub fn is_ipv4(&self) -> bool {
        matches!(self.repr, Repr::V4(_))
    }

    #[inline]
    pub fn is_ipv6(&self) -> bool {
        matches!(self.repr, Repr::V6(..))
    }

    /// Payload width in bytes: 4 or 16.
    #[inline]
    pub fn size(&self) -> usize {
        self.family().size()
    }

    /// The active payload, in network byte order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        match &self.repr {
            Repr::V4(octets) => octets,
            Repr::V6(octets, _) => octets,
        }
    }

    /// Zone index, or [`NO_SCOPE`]. Always [`NO_SCOPE`] for IPv4.
    #[inline]
    pub fn scope(&self) -> u32 {
        match self.repr {
            Repr::V4(_) => NO_SCOPE,
            Repr::V6(_, scope) => scope,
        }
    }

    /// Narrows to an IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::AddressFamilyMismatch`] for IPv6 values, including
    /// IPv4-mapped ones.
    pub fn as_ipv4(&self) -> Result<Ipv4Addr, NetError> {
        match self.repr {
            Repr::V4(octets) => Ok(Ipv4Addr::from(octets)),
            Repr::V6(..) => Err(self.mismatch(Family::Inet)),
        }
    }

    /// Narrows to an IPv6 address. The scope is not part of `Ipv6Addr`;
    /// read it with [`scope`](Self::scope).
    ///
    /// # Errors
    ///
    /// Returns [`NetError::AddressFamilyMismatch`] for IPv4 values. Use
    /// [`to_ipv6_mapped`](Self::to_ipv6_mapped) to widen instead.
    pub fn as_ipv6(&self) -> Result<Ipv6Addr, NetError> {
        match self.repr {
            Repr::V6(octets, _) => Ok(Ipv6Addr::from(octets)),
            Repr::V4(_) => Err(self.mismatch(Family::Inet6)),
        }
    }

    /// IPv4 values become `::ffff:a.b.c.d`; IPv6 values are returned unchanged.
    pub fn to_ipv6_mapped(&self) -> InetAddress {
        match self.repr {
            Repr::V4(octets) => {
                Self::from_octets_v6(Ipv4Addr::from(octets).to_ipv6_mapped().octets(), NO_SCOPE)
            }
            Repr::V6(..) => *self,
        }
    }

    /// Like [`to_ipv6_mapped`](Self::to_ipv6_mapped) but yields the std type,
    /// dropping any scope.
    pub fn to_ipv6_addr(&self) -> Ipv6Addr {
        match self.repr {
            Repr::V4(octets) => Ipv4Addr::from(octets).to_ipv6_mapped(),
            Repr::V6(octets, _) => Ipv6Addr::from(octets),
        }
    }

    /// The std address without the scope.
    pub fn ip(&self) -> IpAddr {
        match self.repr {
            Repr::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Repr::V6(octets, _) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }

    fn mismatch(&self, expected: Family) -> NetError {
        NetError::AddressFamilyMismatch {
            expected,
            actual: self.family(),
        }
    }
}

impl From<Ipv4Addr> for InetAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_octets_v4(addr.octets())
    }
}

impl From<Ipv6Addr> for InetAddress {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_octets_v6(addr.octets(), NO_SCOPE)
    }
}

impl From<IpAddr> for InetAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

/// The port is dropped. A V6 `scope_id` of `0` means unscoped.
impl From<SocketAddr> for InetAddress {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => (*v4.ip()).into(),
            SocketAddr::V6(v6) => {
                let scope = match v6.scope_id() {
                    0 => NO_SCOPE,
                    id => id,
                };
                Self::v6_scoped(*v6.ip(), scope)
            }
        }
    }
}

impl From<InetAddress> for IpAddr {
    fn from(addr: InetAddress) -> Self {
        addr.ip()
    }
}

impl TryFrom<InetAddress> for Ipv4Addr {
    type Error = NetError;

    fn try_from(addr: InetAddress) -> Result<Self, Self::Error> {
        addr.as_ipv4()
    }
}

impl TryFrom<InetAddress> for Ipv6Addr {
    type Error = NetError;

    fn try_from(addr: InetAddress) -> Result<Self, Self::Error> {
        addr.as_ipv6()
    }
}

impl FromStr for InetAddress {
    type Err = NetError;

    /// Parses a numeric literal. Never performs name resolution.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numerical(s).ok_or(NetError::AddressInvalid)
    }
}

impl fmt::Display for InetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::V4(octets) => write!(f, "{}", Ipv4Addr::from(octets)),
            Repr::V6(octets, NO_SCOPE) => write!(f, "{}", Ipv6Addr::from(octets)),
            Repr::V6(octets, scope) => write!(f, "{}%{}", Ipv6Addr::from(octets), scope),
        }
    }
}

impl fmt::Debug for InetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for InetAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InetAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_numerical(&text).ok_or_else(|| {
            de::Error::invalid_value(
                de::Unexpected::Str(&text),
                &"a numeric IPv4 or IPv6 address",
            )
        })
    }
}
