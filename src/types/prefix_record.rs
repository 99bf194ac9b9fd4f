use std::fmt;

use inetnum::addr::Prefix;

//----------------------- meta-data traits/types-----------------------------

/// Trait for types that can be used as the route data of a record.
///
/// The RIB never looks inside the data, it only stores it and hands it back
/// on a lookup. The `Debug` and `Display` bounds exist so that the RIB can
/// log what it stores. Every type that meets them is a `Meta`.
pub trait Meta: fmt::Debug + fmt::Display {}

impl<T: fmt::Debug + fmt::Display> Meta for T {}

//------------ Record --------------------------------------------------------

/// A prefix together with the route data stored for it.
///
/// This is the value that lives in the trees of a RIB. The prefix is kept
/// with the data, so that a longest-match lookup can report which prefix
/// was actually matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<M> {
    pub prefix: Prefix,
    pub meta: M,
}

impl<M> Record<M> {
    pub fn new(prefix: Prefix, meta: M) -> Self {
        Self { prefix, meta }
    }

    pub fn into_meta(self) -> M {
        self.meta
    }
}

impl<M: Meta> fmt::Display for Record<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.meta)
    }
}

//------------ PrefixRecord --------------------------------------------------

/// A borrowed view on a [Record] in a RIB, as returned by queries and
/// iterators.
#[derive(Debug, PartialEq, Eq)]
pub struct PrefixRecord<'a, M> {
    pub prefix: Prefix,
    pub meta: &'a M,
}

impl<'a, M> PrefixRecord<'a, M> {
    pub fn new(prefix: Prefix, meta: &'a M) -> Self {
        Self { prefix, meta }
    }
}

impl<'a, M> From<&'a Record<M>> for PrefixRecord<'a, M> {
    fn from(record: &'a Record<M>) -> Self {
        Self::new(record.prefix, &record.meta)
    }
}

// Not derived, a derive would require M: Clone.
impl<M> Clone for PrefixRecord<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for PrefixRecord<'_, M> {}

impl<M: Meta> fmt::Display for PrefixRecord<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.meta)
    }
}

//------------ RecordSet -----------------------------------------------------

/// A set of records, split by address family, as returned in the less- and
/// more-specifics of a [QueryResult](crate::match_options::QueryResult).
#[derive(Debug)]
pub struct RecordSet<'a, M> {
    pub v4: Vec<PrefixRecord<'a, M>>,
    pub v6: Vec<PrefixRecord<'a, M>>,
}

impl<'a, M> RecordSet<'a, M> {
    pub fn new() -> Self {
        Self {
            v4: Default::default(),
            v6: Default::default(),
        }
    }

    pub fn push(&mut self, record: PrefixRecord<'a, M>) {
        match record.prefix.addr() {
            std::net::IpAddr::V4(_) => &mut self.v4,
            std::net::IpAddr::V6(_) => &mut self.v6,
        }
        .push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixRecord<'a, M>> {
        self.v4.iter().chain(self.v6.iter())
    }
}

impl<M> Default for RecordSet<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, M> FromIterator<PrefixRecord<'a, M>> for RecordSet<'a, M> {
    fn from_iter<I: IntoIterator<Item = PrefixRecord<'a, M>>>(
        iter: I,
    ) -> Self {
        let mut set = RecordSet::new();
        for record in iter {
            set.push(record);
        }
        set
    }
}

impl<M: Meta> fmt::Display for RecordSet<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        write!(f, "[")?;
        for record in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", record)?;
            first = false;
        }
        write!(f, "]")
    }
}
