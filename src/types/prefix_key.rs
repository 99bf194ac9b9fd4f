use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use inetnum::addr::Prefix;
use log::trace;

use super::{errors::ParseError, AddressFamily, RadixKey};

// Length of the ::ffff:0:0/96 prefix that IPv4-mapped IPv6 addresses live
// in.
const V4_MAPPED_LEN: u8 = 96;

//------------ PrefixKey -----------------------------------------------------

/// A prefix that is ready to be used with a RIB: its address family, the
/// canonical prefix (host bits zeroed), and the key it is stored under in
/// the tree for that family.
///
/// An address that has a valid IPv4 representation is always classified as
/// IPv4, even if it was written as an IPv4-mapped IPv6 address. In that case
/// the prefix is translated into IPv4 space as well, so `::ffff:10.0.0.0/104`
/// and `10.0.0.0/8` produce the same `PrefixKey`. A mapped prefix shorter
/// than /96, like `::ffff:0:0/80`, has no IPv4 equivalent and is rejected
/// with [ParseError::LengthOutOfRange].
///
/// ```
/// use prefix_rib::{AddressFamily, PrefixKey};
///
/// let pk: PrefixKey = "10.1.2.3/12".parse().unwrap();
/// assert_eq!(pk.family(), AddressFamily::Ipv4);
/// assert_eq!(pk.prefix().to_string(), "10.0.0.0/12");
/// assert_eq!(pk.key().to_string(), "000010100000");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrefixKey {
    family: AddressFamily,
    prefix: Prefix,
    key: RadixKey,
}

impl PrefixKey {
    /// Create the key for an already parsed prefix.
    pub fn from_prefix(prefix: Prefix) -> Result<Self, ParseError> {
        Self::from_addr_and_len(prefix.addr(), prefix.len())
    }

    fn from_addr_and_len(addr: IpAddr, len: u8) -> Result<Self, ParseError> {
        let (family, addr, len) = match addr {
            IpAddr::V4(_) => (AddressFamily::Ipv4, addr, len),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) if len <= AddressFamily::Ipv6.bits() => {
                    let v4_len = len.checked_sub(V4_MAPPED_LEN).ok_or(
                        ParseError::LengthOutOfRange {
                            family: AddressFamily::Ipv4,
                            len,
                        },
                    )?;
                    trace!("mapped {}/{} to {}/{}", v6, len, v4, v4_len);
                    (AddressFamily::Ipv4, IpAddr::V4(v4), v4_len)
                }
                _ => (AddressFamily::Ipv6, addr, len),
            },
        };

        if len > family.bits() {
            return Err(ParseError::LengthOutOfRange { family, len });
        }

        let prefix = Prefix::new_relaxed(addr, len)
            .map_err(|_| ParseError::LengthOutOfRange { family, len })?;

        let key = match prefix.addr() {
            IpAddr::V4(addr) => RadixKey::from_octets(&addr.octets(), len),
            IpAddr::V6(addr) => RadixKey::from_octets(&addr.octets(), len),
        };

        Ok(Self {
            family,
            prefix,
            key,
        })
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The prefix with all its host bits set to zero.
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn key(&self) -> RadixKey {
        self.key
    }
}

impl FromStr for PrefixKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = s.split_once('/').ok_or(ParseError::MissingLength)?;

        let addr = IpAddr::from_str(addr)
            .map_err(|_| ParseError::InvalidAddress(addr.to_string()))?;

        // u8::from_str also takes a leading '+', we don't.
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidLength(len.to_string()));
        }
        let len = len
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidLength(len.to_string()))?;

        Self::from_addr_and_len(addr, len)
    }
}

impl TryFrom<Prefix> for PrefixKey {
    type Error = ParseError;

    fn try_from(prefix: Prefix) -> Result<Self, Self::Error> {
        Self::from_prefix(prefix)
    }
}

impl fmt::Display for PrefixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.prefix, self.family)
    }
}

/// Parse a prefix in CIDR notation into its address family and the key it
/// is stored under.
///
/// This is the same as `cidr.parse::<PrefixKey>()`.
pub fn parse_prefix(cidr: &str) -> Result<PrefixKey, ParseError> {
    cidr.parse()
}
