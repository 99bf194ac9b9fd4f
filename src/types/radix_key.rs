use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::AddressFamily;

//------------ RadixKey ------------------------------------------------------

// A RadixKey is the bit string that a prefix is stored under in a tree. Its
// length is exactly the prefix length, and the bits are the network bits of
// the prefix, most significant first.
//
// The bits are held left-aligned in a u128, regardless of the address
// family, so that IPv4 keys (at most 32 bits) and IPv6 keys (at most 128
// bits) use the same arithmetic. All bits to the right of `len` are always
// zero. That way two keys are equal if and only if they are the same
// string, and key A is a (string) prefix of key B if and only if A's network
// is a supernet of, or the same as, B's network.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RadixKey {
    bits: u128,
    len: u8,
}

impl RadixKey {
    /// The empty key, i.e. the key for a default route (`0.0.0.0/0` or
    /// `::/0`). It is a prefix of every other key.
    pub const EMPTY: RadixKey = RadixKey { bits: 0, len: 0 };

    /// The maximum length of a key in bits.
    pub const MAX_LEN: u8 = 128;

    /// Create a key from left-aligned bits. Bits beyond `len` are cleared,
    /// and `len` is capped at 128.
    pub fn new(bits: u128, len: u8) -> Self {
        let len = len.min(Self::MAX_LEN);
        Self {
            bits: bits & mask(len),
            len,
        }
    }

    /// Create a key from the octets of a network address, in network byte
    /// order. This is every octet rendered as its 8 bits, concatenated, and
    /// then cut to the first `len` bits. `len` is capped at the number of
    /// bits available in `octets`.
    pub fn from_octets(octets: &[u8], len: u8) -> Self {
        let octets = octets.iter().take(16);
        let available = (octets.len() * 8) as u8;
        let bits = octets
            .enumerate()
            .fold(0_u128, |acc, (i, o)| acc | (*o as u128) << (120 - 8 * i));
        Self::new(bits, len.min(available))
    }

    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the first `len` bits of this key. If `len` is equal to or
    /// greater than the length of this key, the key is returned unchanged.
    #[must_use]
    pub fn truncate(self, len: u8) -> Self {
        if len >= self.len {
            return self;
        }
        Self::new(self.bits, len)
    }

    /// The bit at position `pos`, counting from the left, starting at zero.
    /// Positions at or beyond the end of the key read as zero.
    pub fn bit(&self, pos: u8) -> bool {
        if pos >= self.len {
            return false;
        }
        (self.bits >> (127 - pos as u32)) & 1 == 1
    }

    /// The number of leading bits this key has in common with `other`.
    pub fn common_len(&self, other: &RadixKey) -> u8 {
        let diff = (self.bits ^ other.bits).leading_zeros() as u8;
        diff.min(self.len).min(other.len)
    }

    /// Whether this key is a prefix of `other` (this includes the case
    /// where they are equal).
    pub fn is_prefix_of(&self, other: &RadixKey) -> bool {
        self.len <= other.len && other.truncate(self.len).bits == self.bits
    }

    /// Turn the bits of this key back into an address of the given family.
    pub fn into_ipaddr(self, family: AddressFamily) -> IpAddr {
        match family {
            AddressFamily::Ipv4 => {
                IpAddr::V4(Ipv4Addr::from((self.bits >> 96) as u32))
            }
            AddressFamily::Ipv6 => IpAddr::V6(Ipv6Addr::from(self.bits)),
        }
    }
}

// Renders the key as a string of '0' and '1' characters, exactly `len`
// characters long. The empty key renders as the empty string.
impl fmt::Display for RadixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..self.len {
            f.write_str(if self.bit(pos) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// You can't shift a u128 by 128, so the full length gets its own arm.
fn mask(len: u8) -> u128 {
    match len {
        0 => 0,
        1..=127 => u128::MAX << (128 - len as u32),
        _ => u128::MAX,
    }
}
