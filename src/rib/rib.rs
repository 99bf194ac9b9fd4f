use inetnum::addr::Prefix;
use log::info;

use crate::errors::ParseError;
use crate::match_options::{MatchOptions, MatchType, QueryResult};
use crate::prefix_record::{Meta, PrefixRecord, RecordSet};
use crate::stats::StoreStats;
use crate::types::{parse_prefix, AddressFamily, PrefixKey};

use super::af_rib::AfRib;

//------------ Rib -----------------------------------------------------------

/// A Routing Information Base for IPv4 and IPv6 prefixes.
///
/// The RIB maps prefixes to route data of type `M`, which it does not
/// interpret. It has one tree per address family, IPv4 prefixes and IPv6
/// prefixes never match each other.
///
/// Prefixes are passed in as strings in CIDR notation (`add`, `delete`,
/// `get`), or as [Prefix] (`insert`, `remove`, `longest_match`,
/// `match_prefix`). Host bits in a prefix are ignored, and an IPv4-mapped
/// IPv6 prefix is treated as the IPv4 prefix it maps to. A string that
/// cannot be parsed results in a [ParseError], and leaves the RIB unchanged.
/// There are no other errors.
///
/// ```
/// use prefix_rib::rib::Rib;
///
/// let mut rib = Rib::new();
/// rib.add("10.0.0.0/8", "A")?;
/// rib.add("10.1.0.0/16", "B")?;
///
/// assert_eq!(rib.get("10.1.2.3/32")?, Some(&"B"));
/// assert_eq!(rib.get("10.2.0.0/16")?, Some(&"A"));
/// assert_eq!(rib.get("192.168.0.0/16")?, None);
/// # Ok::<(), prefix_rib::errors::ParseError>(())
/// ```
///
/// All methods run to completion without blocking. Methods that modify the
/// RIB take `&mut self`, so sharing a RIB between threads requires the
/// caller to wrap it in a lock.
#[derive(Debug)]
pub struct Rib<M> {
    v4: AfRib<M>,
    v6: AfRib<M>,
}

impl<M> Rib<M> {
    /// Create a new, empty RIB.
    pub fn new() -> Self {
        Self {
            v4: AfRib::new(AddressFamily::Ipv4),
            v6: AfRib::new(AddressFamily::Ipv6),
        }
    }

    fn af(&self, family: AddressFamily) -> &AfRib<M> {
        match family {
            AddressFamily::Ipv4 => &self.v4,
            AddressFamily::Ipv6 => &self.v6,
        }
    }

    fn af_mut(&mut self, family: AddressFamily) -> &mut AfRib<M> {
        match family {
            AddressFamily::Ipv4 => &mut self.v4,
            AddressFamily::Ipv6 => &mut self.v6,
        }
    }

    /// The total number of prefixes in the RIB.
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn prefixes_v4_count(&self) -> usize {
        self.v4.len()
    }

    pub fn prefixes_v6_count(&self) -> usize {
        self.v6.len()
    }

    /// A snapshot of the prefix and node counters of both trees.
    pub fn counters(&self) -> StoreStats {
        StoreStats {
            v4: self.v4.counters().clone(),
            v6: self.v6.counters().clone(),
            nodes_v4: self.v4.nodes_count(),
            nodes_v6: self.v6.nodes_count(),
        }
    }

    /// Remove all prefixes from the RIB.
    pub fn clear(&mut self) {
        info!("rib clear: {} prefixes", self.len());
        self.v4.clear();
        self.v6.clear();
    }

    /// All records in the RIB, the IPv4 records first. Within an address
    /// family records are returned in prefix order, where a prefix comes
    /// before its more-specifics.
    pub fn prefixes_iter(&self) -> impl Iterator<Item = PrefixRecord<'_, M>> {
        self.v4
            .iter()
            .chain(self.v6.iter())
            .map(PrefixRecord::from)
    }

    //-------- Delete --------------------------------------------------------

    /// Remove `prefix`, a string in CIDR notation, and return its route
    /// data. Only the exact prefix is removed, less- and more-specifics are
    /// left alone. Deleting a prefix that isn't stored returns `Ok(None)`.
    pub fn delete(&mut self, prefix: &str) -> Result<Option<M>, ParseError> {
        let pk = parse_prefix(prefix)?;
        Ok(self.remove_key(&pk))
    }

    /// Remove `prefix`. See [Rib::delete].
    pub fn remove(&mut self, prefix: &Prefix) -> Result<Option<M>, ParseError> {
        let pk = PrefixKey::from_prefix(*prefix)?;
        Ok(self.remove_key(&pk))
    }

    fn remove_key(&mut self, pk: &PrefixKey) -> Option<M> {
        info!("rib del: {}", pk.prefix());
        self.af_mut(pk.family()).remove(&pk.key())
    }

    //-------- Queries -------------------------------------------------------

    /// Return the route data of the longest stored prefix that covers
    /// `prefix`, which is a string in CIDR notation. This may be `prefix`
    /// itself, or a default route. If no stored prefix covers `prefix`,
    /// `Ok(None)` is returned.
    ///
    /// Note that the query is a prefix, not a plain address: to look up a
    /// single address use a host prefix, e.g. `192.0.2.1/32`.
    pub fn get(&self, prefix: &str) -> Result<Option<&M>, ParseError> {
        let pk = parse_prefix(prefix)?;
        Ok(self.longest_match_key(&pk).map(|rec| rec.meta))
    }

    /// Return the route data stored for exactly `prefix`, without falling
    /// back to less-specific prefixes.
    pub fn get_exact(&self, prefix: &str) -> Result<Option<&M>, ParseError> {
        let pk = parse_prefix(prefix)?;
        Ok(self.af(pk.family()).get(&pk.key()).map(|rec| &rec.meta))
    }

    /// Whether exactly `prefix` is stored in the RIB.
    pub fn contains(&self, prefix: &str) -> Result<bool, ParseError> {
        Ok(self.get_exact(prefix)?.is_some())
    }

    /// The longest stored prefix that covers `search_pfx`, together with its
    /// route data.
    pub fn longest_match(
        &self,
        search_pfx: &Prefix,
    ) -> Result<Option<PrefixRecord<'_, M>>, ParseError> {
        let pk = PrefixKey::from_prefix(*search_pfx)?;
        Ok(self.longest_match_key(&pk))
    }

    fn longest_match_key(&self, pk: &PrefixKey) -> Option<PrefixRecord<'_, M>> {
        self.af(pk.family())
            .longest_match(&pk.key())
            .map(PrefixRecord::from)
    }

    /// All stored prefixes that strictly cover `search_pfx`, shortest
    /// first.
    pub fn less_specifics_from(
        &self,
        search_pfx: &Prefix,
    ) -> Result<RecordSet<'_, M>, ParseError> {
        let pk = PrefixKey::from_prefix(*search_pfx)?;
        Ok(self.less_specifics_key(&pk))
    }

    fn less_specifics_key(&self, pk: &PrefixKey) -> RecordSet<'_, M> {
        self.af(pk.family())
            .less_specifics(&pk.key())
            .map(PrefixRecord::from)
            .collect()
    }

    /// All stored prefixes that are strictly covered by `search_pfx`, in
    /// prefix order.
    pub fn more_specifics_from(
        &self,
        search_pfx: &Prefix,
    ) -> Result<RecordSet<'_, M>, ParseError> {
        let pk = PrefixKey::from_prefix(*search_pfx)?;
        Ok(self.more_specifics_key(&pk))
    }

    fn more_specifics_key(&self, pk: &PrefixKey) -> RecordSet<'_, M> {
        self.af(pk.family())
            .more_specifics(&pk.key())
            .map(PrefixRecord::from)
            .collect()
    }

    /// Query the RIB for `search_pfx`.
    ///
    /// The `match_type` in `options` decides what ends up in the `prefix`
    /// and `meta` fields of the result:
    ///
    /// - [MatchType::ExactMatch]: only `search_pfx` itself, if it is stored.
    /// - [MatchType::LongestMatch] and [MatchType::EmptyMatch]: the longest
    ///   stored prefix covering `search_pfx`.
    ///
    /// The `match_type` of the result is `ExactMatch` if the stored prefix
    /// equals `search_pfx`, `LongestMatch` if a less-specific was found, and
    /// `EmptyMatch` if nothing was found.
    ///
    /// Independently of the match type, all less- and/or more-specifics of
    /// `search_pfx` are included if requested in `options`.
    pub fn match_prefix(
        &self,
        search_pfx: &Prefix,
        options: &MatchOptions,
    ) -> Result<QueryResult<'_, M>, ParseError> {
        let pk = PrefixKey::from_prefix(*search_pfx)?;
        let af = self.af(pk.family());

        let found = match options.match_type {
            MatchType::ExactMatch => af.get(&pk.key()),
            MatchType::LongestMatch | MatchType::EmptyMatch => {
                af.longest_match(&pk.key())
            }
        };

        let mut res = QueryResult::empty();
        if let Some(rec) = found {
            res.match_type = if rec.prefix == pk.prefix() {
                MatchType::ExactMatch
            } else {
                MatchType::LongestMatch
            };
            res.prefix = Some(rec.prefix);
            res.meta = Some(&rec.meta);
        }
        if options.include_less_specifics {
            res.less_specifics = Some(self.less_specifics_key(&pk));
        }
        if options.include_more_specifics {
            res.more_specifics = Some(self.more_specifics_key(&pk));
        }

        Ok(res)
    }
}

impl<M: Meta> Rib<M> {
    //-------- Add -----------------------------------------------------------

    /// Store `meta` for `prefix`, a string in CIDR notation. If `prefix` was
    /// already stored, its route data is replaced, and the old route data is
    /// returned.
    pub fn add(&mut self, prefix: &str, meta: M) -> Result<Option<M>, ParseError> {
        let pk = parse_prefix(prefix)?;
        Ok(self.insert_key(&pk, meta))
    }

    /// Store `meta` for `prefix`. See [Rib::add].
    pub fn insert(
        &mut self,
        prefix: &Prefix,
        meta: M,
    ) -> Result<Option<M>, ParseError> {
        let pk = PrefixKey::from_prefix(*prefix)?;
        Ok(self.insert_key(&pk, meta))
    }

    fn insert_key(&mut self, pk: &PrefixKey, meta: M) -> Option<M> {
        info!(
            "rib add: {} {} v4: {}",
            pk.prefix(),
            meta,
            pk.family().is_ipv4()
        );
        self.af_mut(pk.family()).insert(pk, meta)
    }
}

impl<M> Default for Rib<M> {
    fn default() -> Self {
        Self::new()
    }
}
