use log::trace;

use crate::prefix_record::Record;
use crate::radix_tree::RadixTree;
use crate::stats::Counters;
use crate::types::{AddressFamily, PrefixKey, RadixKey};

//------------ AfRib ---------------------------------------------------------

// The part of a RIB that holds the records for one address family. It owns
// one tree and keeps the counters for it. It trusts its caller to only hand
// it keys of its own family, the Rib takes care of that by dispatching on
// the family of a PrefixKey.
#[derive(Debug)]
pub(crate) struct AfRib<M> {
    family: AddressFamily,
    tree: RadixTree<Record<M>>,
    counters: Counters,
}

impl<M> AfRib<M> {
    pub(crate) fn new(family: AddressFamily) -> Self {
        Self {
            family,
            tree: RadixTree::new(),
            counters: Counters::new(family),
        }
    }

    pub(crate) fn insert(&mut self, pk: &PrefixKey, meta: M) -> Option<M> {
        debug_assert_eq!(pk.family(), self.family);
        let key = pk.key();
        let old = self.tree.insert(key, Record::new(pk.prefix(), meta));
        if old.is_none() {
            self.counters.inc_prefixes_count(key.len());
        } else {
            trace!("{} replaced record for {}", self.family, pk.prefix());
        }
        old.map(Record::into_meta)
    }

    pub(crate) fn remove(&mut self, key: &RadixKey) -> Option<M> {
        let old = self.tree.remove(key);
        if old.is_some() {
            self.counters.dec_prefixes_count(key.len());
        }
        old.map(Record::into_meta)
    }

    pub(crate) fn get(&self, key: &RadixKey) -> Option<&Record<M>> {
        self.tree.get(key)
    }

    pub(crate) fn longest_match(&self, key: &RadixKey) -> Option<&Record<M>> {
        self.tree.longest_match(key).map(|(_, record)| record)
    }

    pub(crate) fn less_specifics(
        &self,
        key: &RadixKey,
    ) -> impl Iterator<Item = &Record<M>> {
        self.tree.less_specifics(key).map(|(_, record)| record)
    }

    pub(crate) fn more_specifics(
        &self,
        key: &RadixKey,
    ) -> impl Iterator<Item = &Record<M>> {
        self.tree.more_specifics(key).map(|(_, record)| record)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Record<M>> {
        self.tree.iter().map(|(_, record)| record)
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len()
    }

    pub(crate) fn nodes_count(&self) -> usize {
        self.tree.nodes_count()
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }

    pub(crate) fn clear(&mut self) {
        self.tree.clear();
        self.counters.reset();
    }
}
