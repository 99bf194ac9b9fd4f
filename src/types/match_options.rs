use std::fmt;

use inetnum::addr::Prefix;

use super::prefix_record::{Meta, RecordSet};

//------------ MatchOptions / MatchType -------------------------------------

/// Options for the `match_prefix` method
///
/// The `MatchOptions` struct is used to specify the options for the
/// `match_prefix` method on the RIB.
///
/// Note that the `match_type` field may be different from the actual
/// `MatchType` returned from the result.
///
/// See [crate::rib::Rib::match_prefix] for more details.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// The requested [MatchType]
    pub match_type: MatchType,
    /// Whether to include all less-specific records in the query result
    pub include_less_specifics: bool,
    /// Whether to include all more-specific records in the query result
    pub include_more_specifics: bool,
}

impl MatchOptions {
    /// Options for a plain longest-prefix match, without less- or
    /// more-specifics.
    pub fn longest_match() -> Self {
        Self {
            match_type: MatchType::LongestMatch,
            include_less_specifics: false,
            include_more_specifics: false,
        }
    }

    /// Options for an exact match, without less- or more-specifics.
    pub fn exact_match() -> Self {
        Self {
            match_type: MatchType::ExactMatch,
            include_less_specifics: false,
            include_more_specifics: false,
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::longest_match()
    }
}

/// Option to set the match type for a prefix match. Type can be Exact,
/// Longest, or Empty. The match type only applies to the `prefix` and
/// `meta` fields in the [QueryResult] that is returned by a
/// [Rib::match_prefix()](crate::rib::Rib::match_prefix) query.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MatchType {
    /// Only return the requested prefix, and the associated record, if the
    /// requested prefix exactly matches a stored prefix.
    ExactMatch,
    /// Return the longest matching prefix for the requested prefix (if
    /// any). May match the prefix exactly.
    LongestMatch,
    /// Return the longest matching prefix, or none at all.
    EmptyMatch,
}

impl MatchType {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::EmptyMatch)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchType::ExactMatch => write!(f, "exact-match"),
            MatchType::LongestMatch => write!(f, "longest-match"),
            MatchType::EmptyMatch => write!(f, "empty-match"),
        }
    }
}

//------------- QueryResult -------------------------------------------------

/// The type that is returned by a query.
///
/// It contains the prefix that was found in the RIB together with a
/// reference to its route data, as well as less- or more-specifics as
/// requested. The less- and more-specifics are taken relative to the
/// search prefix, not relative to the matched prefix.
///
/// See [crate::rib::Rib::match_prefix] for more details.
#[derive(Debug)]
pub struct QueryResult<'a, M> {
    /// The match type of the resulting prefix
    pub match_type: MatchType,
    /// The resulting prefix
    pub prefix: Option<Prefix>,
    /// The route data associated with the resulting prefix
    pub meta: Option<&'a M>,
    /// The less-specifics of the search prefix together with their route
    /// data
    pub less_specifics: Option<RecordSet<'a, M>>,
    /// The more-specifics of the search prefix together with their route
    /// data
    pub more_specifics: Option<RecordSet<'a, M>>,
}

impl<M> QueryResult<'_, M> {
    pub fn empty() -> Self {
        QueryResult {
            match_type: MatchType::EmptyMatch,
            prefix: None,
            meta: None,
            less_specifics: None,
            more_specifics: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.match_type.is_empty()
    }
}

impl<M: Meta> fmt::Display for QueryResult<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pfx_str = match self.prefix {
            Some(pfx) => format!("{}", pfx),
            None => "".to_string(),
        };
        let meta_str = match self.meta {
            Some(meta) => format!("{}", meta),
            None => "".to_string(),
        };
        writeln!(f, "match_type: {}", self.match_type)?;
        writeln!(f, "prefix: {}", pfx_str)?;
        writeln!(f, "meta: {}", meta_str)?;
        writeln!(
            f,
            "less_specifics: {}",
            if let Some(ls) = self.less_specifics.as_ref() {
                format!("{}", ls)
            } else {
                "".to_string()
            }
        )?;
        writeln!(
            f,
            "more_specifics: {}",
            if let Some(ms) = self.more_specifics.as_ref() {
                format!("{}", ms)
            } else {
                "".to_string()
            }
        )
    }
}
