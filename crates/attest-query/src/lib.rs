//! Filter and query engine for attestation collections
//!
//! Callers select subsets of an attestation collection by combining boolean
//! [`Filter`]s into a [`Query`] and evaluating it under all-must-match or
//! any-must-match semantics, chosen per invocation.
//!
//! # Example
//!
//! ```
//! use attest_query::{PredicateTypeFilter, Query, QueryMode, QueryOptions};
//! use attest_types::{BareEnvelope, Predicate, Statement, Subject};
//!
//! let envelopes = vec![
//!     BareEnvelope::new(Statement::new(
//!         vec![Subject::new("app").with_digest("sha256", "abc123")],
//!         Predicate::new("https://slsa.dev/provenance/v1"),
//!     ))
//!     .into_ref(),
//! ];
//!
//! let query = Query::new().with_filter(PredicateTypeFilter::new("https://slsa.dev/provenance/v1"));
//! let provenance = query.run(&envelopes, &QueryOptions::new());
//! assert_eq!(provenance.len(), 1);
//!
//! // The same query under OR semantics.
//! let any = query.run(&envelopes, &QueryOptions::new().with_mode(QueryMode::Or));
//! assert_eq!(any.len(), 1);
//! ```

pub mod filters;
pub mod query;

pub use filters::{IdentityFilter, PredicateTypeFilter, SubjectFilter, VerifiedFilter};
pub use query::{
    Filter, FilterSet, Query, QueryMode, QueryOptions, QUERY_MODE_AND, QUERY_MODE_OR,
};
