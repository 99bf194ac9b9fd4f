#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]

//! A library that provides a Routing Information Base (RIB) for IPv4 and
//! IPv6 prefixes, with longest-prefix matching.
//!
//! The RIB stores route data of any type for prefixes in CIDR notation,
//! and answers the question "which stored prefix is the most specific one
//! covering this prefix". It has one tree per address family, so IPv4 and
//! IPv6 prefixes never match each other.
//!
//! Every prefix is turned into a key: the bits of its network address, cut
//! to the prefix length. A prefix covers another prefix exactly when its key
//! is a prefix of the other key, so longest-prefix matching comes down to
//! finding the longest stored key that is a prefix of the search key. The
//! keys are stored in a path-compressed binary trie ([RadixTree]).
//!
//! ```
//! use prefix_rib::rib::Rib;
//! use prefix_rib::test_types::PrefixAs;
//!
//! let mut rib = Rib::new();
//! rib.add("0.0.0.0/0", PrefixAs(64496))?;
//! rib.add("2001:db8::/32", PrefixAs(64497))?;
//!
//! assert_eq!(rib.get("8.8.8.8/32")?, Some(&PrefixAs(64496)));
//! assert_eq!(rib.get("2001:db8:1::/48")?, Some(&PrefixAs(64497)));
//! assert_eq!(rib.get("2001:db9::/32")?, None);
//! # Ok::<(), prefix_rib::errors::ParseError>(())
//! ```
mod radix_tree;
mod types;

// re-exports
pub use inetnum::addr;

// Public Interfaces on the root of the crate

/// The RIB for IPv4 and IPv6 prefixes
pub mod rib;

/// The trie that backs each address family in a RIB
pub use radix_tree::{Iter, LessSpecificsIter, RadixTree};

/// Types used to create match queries on a RIB
pub use types::match_options;

/// Record, Record Set and the `Meta` trait for route data
pub use types::prefix_record;

/// Error types returned by a RIB
pub use types::errors;

/// The two address families a RIB holds
pub use types::AddressFamily;

/// Turning prefixes in CIDR notation into tree keys
pub use types::{parse_prefix, PrefixKey, RadixKey};

/// Statistics types returned by methods on a RIB
pub use types::stats;

// Used in tests
#[doc(hidden)]
pub use types::test_types;
