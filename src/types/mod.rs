pub(crate) mod af;
pub mod match_options;
pub(crate) mod prefix_key;
pub mod prefix_record;
pub(crate) mod radix_key;

pub use af::AddressFamily;
pub use prefix_key::{parse_prefix, PrefixKey};
pub use radix_key::RadixKey;

pub mod errors;
pub mod stats;
pub mod test_types;
