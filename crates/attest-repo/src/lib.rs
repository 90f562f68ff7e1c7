//! Repository contracts for attestation storage collaborators
//!
//! Storage backends plug into the framework by implementing a subset of the
//! capability traits defined here ([`Fetcher`], [`FetcherBySubject`],
//! [`FetcherByPredicateType`], [`FetcherByPredicateTypeAndSubject`],
//! [`Storer`]) and advertising that subset through [`Repository`]. Fetches
//! are parametrized by [`FetchOptions`] (a result limit plus an optional
//! query), which every implementation is expected to honor.
//!
//! [`fetch_filtered`] is the caller-side entry point: it pushes as much
//! filtering down to the backend as its capabilities allow and narrows the
//! rest client-side with the query engine. [`InMemoryRepository`] implements
//! the full capability set and doubles as the reference implementation.

pub mod error;
pub mod fetch;
pub mod memory;
pub mod options;
pub mod repository;

pub use error::{Error, Result};
pub use fetch::fetch_filtered;
pub use memory::InMemoryRepository;
pub use options::{FetchOptions, StoreOptions};
pub use repository::{
    Capabilities, Fetcher, FetcherByPredicateType, FetcherByPredicateTypeAndSubject,
    FetcherBySubject, Repository, Storer,
};
