use std::fmt;

//------------ AddressFamily -------------------------------------------------

/// The address family of a prefix.
///
/// The RIB keeps one tree per family, and the family of a prefix decides
/// which tree it goes into. Keys from different families are never compared
/// to each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    /// AFI 1
    Ipv4,
    /// AFI 2
    Ipv6,
}

impl AddressFamily {
    /// The number of bits in an address of this family, which is also the
    /// maximum length of a prefix, and of a key in the tree for this family.
    pub const fn bits(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    /// The IANA Address Family Identifier.
    pub const fn afi(self) -> u16 {
        match self {
            AddressFamily::Ipv4 => 1,
            AddressFamily::Ipv6 => 2,
        }
    }

    pub fn is_ipv4(self) -> bool {
        matches!(self, AddressFamily::Ipv4)
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}

impl From<std::net::IpAddr> for AddressFamily {
    fn from(addr: std::net::IpAddr) -> Self {
        match addr {
            std::net::IpAddr::V4(_) => AddressFamily::Ipv4,
            std::net::IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}
