use crate::types::RadixKey;

use super::node::Node;

//------------ Iter ----------------------------------------------------------

/// An iterator over all the (key, value) pairs in (a subtree of) a
/// [RadixTree](super::RadixTree).
///
/// The pairs are returned in key order: a key always comes before the keys
/// that it is a prefix of, and keys continuing with a 0 bit come before
/// keys continuing with a 1 bit. For prefixes this means that a supernet is
/// returned before all of its subnets.
pub struct Iter<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(start: Option<&'a Node<V>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self { stack: vec![] }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (RadixKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // right goes on the stack first, so that left comes off first.
            if let Some(right) = node.right.as_deref() {
                self.stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push(left);
            }
            if let Some(value) = node.value.as_ref() {
                return Some((node.key, value));
            }
        }
        None
    }
}

//------------ LessSpecificsIter ---------------------------------------------

/// An iterator over the (key, value) pairs in a
/// [RadixTree](super::RadixTree) whose keys are a strict prefix of a search
/// key, shortest key first.
pub struct LessSpecificsIter<'a, V> {
    next: Option<&'a Node<V>>,
    search_key: RadixKey,
}

impl<'a, V> LessSpecificsIter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>, search_key: RadixKey) -> Self {
        Self {
            next: Some(root),
            search_key,
        }
    }
}

impl<'a, V> Iterator for LessSpecificsIter<'a, V> {
    type Item = (RadixKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next.take() {
            if node.key.len() >= self.search_key.len()
                || !node.key.is_prefix_of(&self.search_key)
            {
                return None;
            }
            self.next = node.next_for(&self.search_key);
            if let Some(value) = node.value.as_ref() {
                return Some((node.key, value));
            }
        }
        None
    }
}
