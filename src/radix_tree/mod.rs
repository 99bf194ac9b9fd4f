//! A path-compressed binary trie keyed by [RadixKey]s.
//!
//! This is the tree that backs each address family in a
//! [Rib](crate::rib::Rib). It knows nothing about addresses: it stores
//! values under bit strings, and it answers the usual prefix questions about
//! them. Which stored keys are a prefix of this key (less-specifics), which
//! is the longest of those (longest match), and which stored keys have this
//! key as a prefix (more-specifics).
//!
//! Nodes only exist for keys that hold a value, and for the points where
//! two keys diverge, so the depth of the tree is bounded by the number of
//! stored keys and by the maximum key length, whichever is smaller.
mod iterators;
mod node;

#[cfg(test)]
mod tests;

use log::trace;

use crate::types::RadixKey;

pub use iterators::{Iter, LessSpecificsIter};
use node::Node;

type Slot<V> = Option<Box<Node<V>>>;

//------------ RadixTree -----------------------------------------------------

#[derive(Debug)]
pub struct RadixTree<V> {
    root: Node<V>,
    // number of values stored
    len: usize,
    // number of nodes, including the root
    nodes: usize,
}

impl<V> RadixTree<V> {
    pub fn new() -> Self {
        Self {
            root: Node::branch(RadixKey::EMPTY),
            len: 0,
            nodes: 1,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes in the tree. This is always at least one, for the
    /// root node.
    pub fn nodes_count(&self) -> usize {
        self.nodes
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        self.root = Node::branch(RadixKey::EMPTY);
        self.len = 0;
        self.nodes = 1;
    }

    //-------- Insert --------------------------------------------------------

    /// Store `value` under `key`. If there was a value stored under `key`
    /// already, it is replaced and returned.
    pub fn insert(&mut self, key: RadixKey, value: V) -> Option<V> {
        let (old, created) = Self::insert_at(&mut self.root, key, value);
        if old.is_none() {
            self.len += 1;
        }
        self.nodes += created;
        old
    }

    // Insert into the subtree of `node`, whose key is a prefix of `key`.
    // Returns the replaced value, if any, and the number of nodes created.
    fn insert_at(node: &mut Node<V>, key: RadixKey, value: V) -> (Option<V>, usize) {
        if node.key.len() == key.len() {
            return (node.value.replace(value), 0);
        }

        let slot = node.child_slot_mut(key.bit(node.key.len()));
        match slot {
            None => {
                *slot = Some(Box::new(Node::leaf(key, value)));
                (None, 1)
            }
            Some(child) if child.key.is_prefix_of(&key) => {
                Self::insert_at(child, key, value)
            }
            Some(_) => Self::split(slot, key, value),
        }
    }

    // The node in `slot` diverges from `key` somewhere after the parent of
    // the slot. Put a new node at the point of divergence, that holds both
    // the existing node and the new value.
    fn split(slot: &mut Slot<V>, key: RadixKey, value: V) -> (Option<V>, usize) {
        let Some(child) = slot.take() else {
            return (None, 0);
        };

        let common = child.key.common_len(&key);
        let mut branch = Box::new(Node::branch(key.truncate(common)));
        trace!("split {} at {} for {}", child.key, branch.key, key);

        let bit = child.key.bit(common);
        *branch.child_slot_mut(bit) = Some(child);

        let created = if common == key.len() {
            // The new key is a prefix of the existing node, the branch node
            // is the new node.
            branch.value = Some(value);
            1
        } else {
            *branch.child_slot_mut(key.bit(common)) =
                Some(Box::new(Node::leaf(key, value)));
            2
        };

        *slot = Some(branch);
        (None, created)
    }

    //-------- Remove --------------------------------------------------------

    /// Remove the value stored under exactly `key`, and return it. Removing a
    /// key that is not in the tree does nothing.
    pub fn remove(&mut self, key: &RadixKey) -> Option<V> {
        let removed = if key.is_empty() {
            self.root.value.take()
        } else {
            let (removed, freed) = Self::remove_at(&mut self.root, key);
            self.nodes -= freed;
            removed
        };
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    // Remove from the subtree of `node`, whose key is a strict prefix of
    // `key`. Returns the removed value, if any, and the number of nodes
    // freed.
    fn remove_at(node: &mut Node<V>, key: &RadixKey) -> (Option<V>, usize) {
        let slot = node.child_slot_mut(key.bit(node.key.len()));

        let (removed, mut freed) = match slot.as_deref_mut() {
            Some(child) if child.key == *key => (child.value.take(), 0),
            Some(child) if child.key.is_prefix_of(key) => {
                Self::remove_at(child, key)
            }
            _ => return (None, 0),
        };

        if removed.is_some() {
            freed += Self::compact(slot);
        }
        (removed, freed)
    }

    // Drop the node in `slot` if it no longer holds a value and has no
    // children, or replace it with its only child if it no longer holds a
    // value. Returns the number of nodes freed.
    fn compact(slot: &mut Slot<V>) -> usize {
        let (left, right) = match slot.as_deref_mut() {
            Some(node) if node.value.is_none() => {
                (node.left.take(), node.right.take())
            }
            _ => return 0,
        };

        match (left, right) {
            (None, None) => {
                *slot = None;
                1
            }
            (Some(only), None) | (None, Some(only)) => {
                trace!("compact to {}", only.key);
                *slot = Some(only);
                1
            }
            (left, right) => {
                if let Some(node) = slot.as_deref_mut() {
                    node.left = left;
                    node.right = right;
                }
                0
            }
        }
    }

    //-------- Queries -------------------------------------------------------

    /// The value stored under exactly `key`.
    pub fn get(&self, key: &RadixKey) -> Option<&V> {
        let mut node = &self.root;
        while node.key.len() < key.len() {
            node = node.next_for(key)?;
            if !node.key.is_prefix_of(key) {
                return None;
            }
        }
        node.value.as_ref()
    }

    /// Whether a value is stored under exactly `key`.
    pub fn contains_key(&self, key: &RadixKey) -> bool {
        self.get(key).is_some()
    }

    /// The longest key in the tree that is a prefix of `key`, together with
    /// its value. This may be `key` itself, or the empty key.
    pub fn longest_match(&self, key: &RadixKey) -> Option<(RadixKey, &V)> {
        let mut node = &self.root;
        let mut best = node.value.as_ref().map(|v| (node.key, v));

        while node.key.len() < key.len() {
            let Some(child) = node.next_for(key) else {
                break;
            };
            if !child.key.is_prefix_of(key) {
                break;
            }
            node = child;
            if let Some(value) = node.value.as_ref() {
                best = Some((node.key, value));
            }
        }

        best
    }

    /// All keys in the tree that are a strict prefix of `key`, with their
    /// values, shortest first.
    pub fn less_specifics(&self, key: &RadixKey) -> LessSpecificsIter<'_, V> {
        LessSpecificsIter::new(&self.root, *key)
    }

    /// All keys in the tree that `key` is a strict prefix of, with their
    /// values, in key order.
    pub fn more_specifics(
        &self,
        key: &RadixKey,
    ) -> impl Iterator<Item = (RadixKey, &V)> {
        let search_key = *key;
        let iter = match self.subtree(key) {
            Some(node) => Iter::new(Some(node)),
            None => Iter::empty(),
        };
        iter.filter(move |(k, _)| *k != search_key)
    }

    // The top-most node whose key has `key` as a prefix.
    fn subtree(&self, key: &RadixKey) -> Option<&Node<V>> {
        let mut node = &self.root;
        while node.key.len() < key.len() {
            node = node.next_for(key)?;
            if key.is_prefix_of(&node.key) {
                return Some(node);
            }
            if !node.key.is_prefix_of(key) {
                return None;
            }
        }
        Some(node)
    }

    /// All (key, value) pairs in the tree, in key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(Some(&self.root))
    }
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a RadixTree<V> {
    type Item = (RadixKey, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
