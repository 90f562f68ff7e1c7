//! Verification and query core for software attestations
//!
//! This crate bundles the framework's building blocks under one roof:
//!
//! - [`types`]: the data model, with subjects, statements, predicates,
//!   envelopes and verification outcomes.
//! - [`query`]: composable boolean filters evaluated over envelope
//!   collections with AND/OR semantics.
//! - [`parse`]: the contracts through which raw bytes become envelopes.
//! - [`repo`]: capability-based fetch/store contracts for storage
//!   backends, plus an in-memory reference repository.
//!
//! The core deliberately performs no cryptography and defines no wire
//! formats or storage layouts; those concerns belong to the parser, verifier
//! and repository collaborators that plug into the traits re-exported here.
//!
//! # Example
//!
//! ```
//! use attest::{
//!     BareEnvelope, Predicate, PredicateTypeFilter, Query, QueryOptions, Statement, Subject,
//!     Verification,
//! };
//!
//! let envelopes = vec![
//!     BareEnvelope::new(Statement::new(
//!         vec![Subject::new("app.tar.gz")
//!             .with_digest("sha256", "1f2a54c9")
//!             .with_digest("sha512", "9b71d224")],
//!         Predicate::new("https://slsa.dev/provenance/v1"),
//!     ))
//!     .with_verification(Verification::new(true))
//!     .into_ref(),
//! ];
//!
//! let provenance = Query::new()
//!     .with_filter(PredicateTypeFilter::new("https://slsa.dev/provenance/v1"))
//!     .run(&envelopes, &QueryOptions::new());
//! assert_eq!(provenance.len(), 1);
//! ```

pub use attest_parse as parse;
pub use attest_query as query;
pub use attest_repo as repo;
pub use attest_types as types;

pub use attest_types::{
    subjects_match, BareEnvelope, Certificate, DigestSet, Envelope, EnvelopeRef, Identity,
    IdentityMatcher, Predicate, PredicateType, Signature, Statement, Subject,
    ToVerificationOptions, Verification, VerifyOption, VerifyOptions, STATEMENT_TYPE_V1,
};

pub use attest_query::{
    Filter, FilterSet, IdentityFilter, PredicateTypeFilter, Query, QueryMode, QueryOptions,
    SubjectFilter, VerifiedFilter, QUERY_MODE_AND, QUERY_MODE_OR,
};

pub use attest_parse::{EnvelopeParser, PredicateParser, StatementParser};

pub use attest_repo::{
    fetch_filtered, Capabilities, FetchOptions, Fetcher, FetcherByPredicateType,
    FetcherByPredicateTypeAndSubject, FetcherBySubject, InMemoryRepository, Repository,
    StoreOptions, Storer,
};
