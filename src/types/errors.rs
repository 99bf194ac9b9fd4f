use std::fmt;

use super::AddressFamily;

/// The error returned by all RIB methods that take a prefix in CIDR
/// notation, if that prefix cannot be parsed.
///
/// This is the only error a RIB returns. A prefix that cannot be found, a
/// prefix that gets overwritten, or a prefix that gets deleted without being
/// present are all normal outcomes. When this error is returned the RIB has
/// not been modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The string has no `/<LEN>` part.
    MissingLength,
    /// The part before the `/` is not an IPv4 or IPv6 address.
    InvalidAddress(String),
    /// The part after the `/` is not a decimal number.
    InvalidLength(String),
    /// The prefix length is larger than the number of bits in an address of
    /// the detected family. For IPv4-mapped IPv6 addresses this includes
    /// lengths shorter than the 96 bits of the mapping prefix.
    LengthOutOfRange { family: AddressFamily, len: u8 },
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingLength => write!(
                f,
                "Error: Invalid CIDR address, expected <ADDRESS>/<LEN>."
            ),
            ParseError::InvalidAddress(addr) => {
                write!(f, "Error: Invalid CIDR address, cannot parse {:?}.", addr)
            }
            ParseError::InvalidLength(len) => write!(
                f,
                "Error: Invalid CIDR address, cannot parse prefix length \
                {:?}.",
                len
            ),
            ParseError::LengthOutOfRange { family, len } => write!(
                f,
                "Error: Invalid CIDR address, prefix length {} is out of \
                range for {}.",
                len, family
            ),
        }
    }
}
