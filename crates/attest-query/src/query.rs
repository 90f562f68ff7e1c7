//! Query evaluation over attestation envelopes
//!
//! A [`Query`] owns an ordered [`FilterSet`] and evaluates it against
//! envelopes under either all-must-match or any-must-match semantics. The
//! combination policy is chosen per invocation through [`QueryOptions`], not
//! baked into the filters, so the same query can serve both policies.

use attest_types::{Envelope, EnvelopeRef};
use std::fmt;

/// String form of the all-must-match evaluation mode.
pub const QUERY_MODE_AND: &str = "AND";
/// String form of the any-must-match evaluation mode.
pub const QUERY_MODE_OR: &str = "OR";

/// A boolean predicate over an envelope.
///
/// Filters are pure and side-effect free, and they have no error channel: a
/// filter that cannot evaluate an envelope must answer `false` rather than
/// fail.
pub trait Filter: fmt::Debug + Send + Sync {
    /// Whether the envelope satisfies this filter's criteria.
    fn matches(&self, envelope: &dyn Envelope) -> bool;
}

/// How a [`FilterSet`] combines its filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// Every filter must match (the default)
    #[default]
    And,
    /// At least one filter must match
    Or,
}

impl QueryMode {
    /// Parse a mode string. Returns `None` for anything other than the
    /// known `"AND"` / `"OR"` values.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            QUERY_MODE_AND => Some(QueryMode::And),
            QUERY_MODE_OR => Some(QueryMode::Or),
            _ => None,
        }
    }
}

/// Per-invocation evaluation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// The combination policy to evaluate under
    pub mode: QueryMode,
}

impl QueryOptions {
    /// Options with the default mode (AND).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation mode.
    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the evaluation mode from a string, keeping the current mode when
    /// the string is not a recognized mode. Unrecognized values are ignored,
    /// never an error.
    pub fn with_mode_str(mut self, mode: &str) -> Self {
        match QueryMode::parse(mode) {
            Some(parsed) => self.mode = parsed,
            None => tracing::warn!(mode, "ignoring unrecognized query mode"),
        }
        self
    }
}

/// An ordered group of filters evaluated together.
#[derive(Debug, Default)]
pub struct FilterSet {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterSet {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter.
    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Number of filters in the set.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the set holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether every filter matches the envelope, stopping at the first
    /// miss. An empty set matches everything.
    pub fn matches_all(&self, envelope: &dyn Envelope) -> bool {
        self.filters.iter().all(|filter| filter.matches(envelope))
    }

    /// Whether at least one filter matches the envelope, stopping at the
    /// first hit. An empty set matches nothing.
    pub fn matches_one(&self, envelope: &dyn Envelope) -> bool {
        self.filters.iter().any(|filter| filter.matches(envelope))
    }

    /// Run a list of envelopes through the set and collect those that match
    /// under the options' mode. The input is left untouched; the result is a
    /// freshly allocated list preserving input order.
    pub fn filter_list(&self, envelopes: &[EnvelopeRef], options: &QueryOptions) -> Vec<EnvelopeRef> {
        let matched: Vec<EnvelopeRef> = envelopes
            .iter()
            .filter(|envelope| match options.mode {
                QueryMode::And => self.matches_all(envelope.as_ref()),
                QueryMode::Or => self.matches_one(envelope.as_ref()),
            })
            .cloned()
            .collect();
        tracing::debug!(
            total = envelopes.len(),
            matched = matched.len(),
            mode = ?options.mode,
            "filtered envelope list"
        );
        matched
    }
}

impl Extend<Box<dyn Filter>> for FilterSet {
    fn extend<I: IntoIterator<Item = Box<dyn Filter>>>(&mut self, iter: I) {
        self.filters.extend(iter);
    }
}

impl FromIterator<Box<dyn Filter>> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn Filter>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

/// A query: an ordered filter set plus the operations to evaluate it.
///
/// Built with the consuming `with_*` methods, so a shared query can never be
/// mutated concurrently; evaluation borrows immutably and is freely
/// concurrent.
#[derive(Debug, Default)]
pub struct Query {
    filters: FilterSet,
}

impl Query {
    /// Create a query with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one filter.
    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add several filters at once, preserving their order.
    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Filter>>,
    {
        self.filters.extend(filters);
        self
    }

    /// The query's filter set.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Run the query over a list of envelopes, returning the ones that
    /// match under the options' mode, in input order.
    pub fn run(&self, envelopes: &[EnvelopeRef], options: &QueryOptions) -> Vec<EnvelopeRef> {
        self.filters.filter_list(envelopes, options)
    }
}
