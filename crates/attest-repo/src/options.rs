//! Fetch and store options

use attest_query::Query;

/// Options honored by every fetching repository.
///
/// The core does not interpret these itself; it is the repository's
/// contract to apply the query to its results and cap them at `limit`.
#[derive(Debug, Default)]
pub struct FetchOptions {
    /// Maximum number of envelopes to return; 0 means unbounded
    pub limit: usize,
    /// Query the fetched envelopes are run through before being returned
    pub query: Option<Query>,
}

impl FetchOptions {
    /// Options with no limit and no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of returned envelopes. 0 removes the cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run results through a query before returning them.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }
}

/// Options honored by storing repositories. Carries no fields today;
/// reserved for extension (e.g. idempotency tokens).
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct StoreOptions {}

impl StoreOptions {
    /// The default store options.
    pub fn new() -> Self {
        Self::default()
    }
}
