//------------ Types for Statistics -----------------------------------------

use std::fmt;

use super::AddressFamily;

//------------ Counters -----------------------------------------------------
//
// This is the struct that's kept per tree in a RIB. It tracks the number of
// unique prefixes per prefix length.

#[derive(Clone)]
pub struct Counters {
    family: AddressFamily,
    // number of unique prefixes in the tree, indexed by prefix length.
    prefixes: [usize; 129],
}

impl Counters {
    pub(crate) fn new(family: AddressFamily) -> Self {
        Self {
            family,
            prefixes: [0; 129],
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The number of prefixes for each prefix length, from /0 up to and
    /// including the maximum length for the family.
    pub fn prefixes_count(&self) -> Vec<usize> {
        self.prefixes
            .iter()
            .take(self.family.bits() as usize + 1)
            .copied()
            .collect::<Vec<_>>()
    }

    /// The number of prefixes with length `len`.
    pub fn prefixes_count_for_len(&self, len: u8) -> usize {
        self.prefixes.get(len as usize).copied().unwrap_or_default()
    }

    /// The total number of prefixes.
    pub fn total(&self) -> usize {
        self.prefixes.iter().sum()
    }

    pub(crate) fn inc_prefixes_count(&mut self, len: u8) {
        if let Some(p) = self.prefixes.get_mut(len as usize) {
            *p += 1;
        }
    }

    pub(crate) fn dec_prefixes_count(&mut self, len: u8) {
        if let Some(p) = self.prefixes.get_mut(len as usize) {
            *p = p.saturating_sub(1);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.prefixes = [0; 129];
    }
}

impl fmt::Debug for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counters")
            .field("family", &self.family)
            .field("total", &self.total())
            .finish()
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (AFI {}) prefixes: {}",
            self.family,
            self.family.afi(),
            self.total()
        )?;
        for (len, count) in self.prefixes_count().iter().enumerate() {
            if *count > 0 {
                writeln!(f, "  /{:<3} {:>8}", len, count)?;
            }
        }
        Ok(())
    }
}

//------------ StoreStats ----------------------------------------------------

/// A snapshot of the counters of a RIB.
#[derive(Clone, Debug)]
pub struct StoreStats {
    pub v4: Counters,
    pub v6: Counters,
    /// The number of nodes in the IPv4 tree, including the root node and
    /// nodes that only exist to branch.
    pub nodes_v4: usize,
    /// The number of nodes in the IPv6 tree.
    pub nodes_v6: usize,
}

impl StoreStats {
    pub fn prefixes_count(&self) -> usize {
        self.v4.total() + self.v6.total()
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes_v4 + self.nodes_v6
    }
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.v4)?;
        writeln!(f, "IPv4 nodes: {}", self.nodes_v4)?;
        write!(f, "{}", self.v6)?;
        writeln!(f, "IPv6 nodes: {}", self.nodes_v6)
    }
}
