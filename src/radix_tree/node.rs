use crate::types::RadixKey;

//------------ Node ----------------------------------------------------------

// A node in a path-compressed binary trie. The key of a node is the full bit
// string from the root up to and including this node, so a node does not
// have to know its depth. A node either holds a value, or it exists only to
// branch, in which case it always has two children (the root node being the
// one exception: it always exists, with the empty key).
//
// The child on the `left` continues with a 0 bit at position `key.len()`,
// the child on the `right` with a 1 bit. The key of every node in a subtree
// has the key of the subtree's root as a prefix.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: RadixKey,
    pub(crate) value: Option<V>,
    pub(crate) left: Option<Box<Node<V>>>,
    pub(crate) right: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    pub(crate) fn branch(key: RadixKey) -> Self {
        Self {
            key,
            value: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn leaf(key: RadixKey, value: V) -> Self {
        Self {
            key,
            value: Some(value),
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, bit: bool) -> Option<&Node<V>> {
        if bit {
            self.right.as_deref()
        } else {
            self.left.as_deref()
        }
    }

    pub(crate) fn child_slot_mut(
        &mut self,
        bit: bool,
    ) -> &mut Option<Box<Node<V>>> {
        if bit {
            &mut self.right
        } else {
            &mut self.left
        }
    }

    // The child that `key` would continue into from this node. The caller
    // makes sure that the key of this node is a strict prefix of `key`.
    pub(crate) fn next_for(&self, key: &RadixKey) -> Option<&Node<V>> {
        self.child(key.bit(self.key.len()))
    }
}
