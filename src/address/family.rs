use serde::{Deserialize, Serialize};
use std::fmt;

/// Address family discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Family {
    /// IPv4, 4-byte payload.
    #[default]
    Inet,
    /// IPv6, 16-byte payload plus an optional zone.
    Inet6,
}

impl Family {
    /// Payload width in bytes.
    pub const fn size(self) -> usize {
        match self {
            Family::Inet => 4,
            Family::Inet6 => 16,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Inet => f.write_str("INET"),
            Family::Inet6 => f.write_str("INET6"),
        }
    }
}
