//! Repository capability contracts
//!
//! A repository is any system that can store attestations, serve them, or
//! both. Rather than one monolithic interface, repositories implement the
//! subset of capability traits below that their backend supports, and
//! advertise that subset through [`Repository::capabilities`]. Callers should
//! prefer the most specific fetcher a repository offers, pushing filtering
//! into the storage layer instead of fetching everything and filtering
//! client-side.
//!
//! All fetch/store operations are async; cancelling one is done by dropping
//! its future. Implementations must be cancel-safe and must not leave
//! detached work running once their future is dropped.

use crate::error::Result;
use crate::options::{FetchOptions, StoreOptions};
use async_trait::async_trait;
use attest_types::{EnvelopeRef, PredicateType, Subject};

/// The capability set a repository advertises. Obtained once from
/// [`Repository::capabilities`]; safe to cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Supports coarse fetching with client-visible post-filtering
    pub fetch: bool,
    /// Natively narrows fetches by subject digests
    pub fetch_by_subject: bool,
    /// Natively narrows fetches by predicate type
    pub fetch_by_predicate_type: bool,
    /// Natively narrows fetches by predicate type and subject together
    pub fetch_by_predicate_type_and_subject: bool,
    /// Can persist envelopes
    pub store: bool,
}

/// Coarse fetching: return attestations, post-filtered by the options'
/// query and capped at its limit.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch envelopes according to `options`.
    async fn fetch(&self, options: &FetchOptions) -> Result<Vec<EnvelopeRef>>;
}

/// Fetching with native narrowing by subject digests.
#[async_trait]
pub trait FetcherBySubject: Send + Sync {
    /// Fetch the envelopes whose statements cover any of `subjects`.
    async fn fetch_by_subject(
        &self,
        options: &FetchOptions,
        subjects: &[Subject],
    ) -> Result<Vec<EnvelopeRef>>;
}

/// Fetching with native narrowing by predicate type.
#[async_trait]
pub trait FetcherByPredicateType: Send + Sync {
    /// Fetch the envelopes carrying any of the given predicate types.
    async fn fetch_by_predicate_type(
        &self,
        options: &FetchOptions,
        predicate_types: &[PredicateType],
    ) -> Result<Vec<EnvelopeRef>>;
}

/// Fetching with native narrowing by predicate type and subject together.
#[async_trait]
pub trait FetcherByPredicateTypeAndSubject: Send + Sync {
    /// Fetch the envelopes carrying any of the given predicate types whose
    /// statements cover any of `subjects`.
    async fn fetch_by_predicate_type_and_subject(
        &self,
        options: &FetchOptions,
        predicate_types: &[PredicateType],
        subjects: &[Subject],
    ) -> Result<Vec<EnvelopeRef>>;
}

/// Persisting envelopes.
#[async_trait]
pub trait Storer: Send + Sync {
    /// Store the given envelopes.
    async fn store(&self, options: &StoreOptions, envelopes: &[EnvelopeRef]) -> Result<()>;
}

/// Capability negotiation surface of a repository.
///
/// Each accessor answers `None` when the backend does not support the
/// capability; the default implementations advertise nothing. A repository
/// that exposes a method but declines to support it dynamically returns
/// [`Error::FetcherMethodNotImplemented`] /
/// [`Error::StorerMethodNotImplemented`] from the method instead.
///
/// [`Error::FetcherMethodNotImplemented`]: crate::Error::FetcherMethodNotImplemented
/// [`Error::StorerMethodNotImplemented`]: crate::Error::StorerMethodNotImplemented
pub trait Repository: Send + Sync {
    /// The capability set this repository advertises.
    fn capabilities(&self) -> Capabilities;

    /// Coarse fetching, when supported.
    fn fetcher(&self) -> Option<&dyn Fetcher> {
        None
    }

    /// Native narrowing by subject, when supported.
    fn fetcher_by_subject(&self) -> Option<&dyn FetcherBySubject> {
        None
    }

    /// Native narrowing by predicate type, when supported.
    fn fetcher_by_predicate_type(&self) -> Option<&dyn FetcherByPredicateType> {
        None
    }

    /// Native narrowing by predicate type and subject, when supported.
    fn fetcher_by_predicate_type_and_subject(
        &self,
    ) -> Option<&dyn FetcherByPredicateTypeAndSubject> {
        None
    }

    /// Storing, when supported.
    fn storer(&self) -> Option<&dyn Storer> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Repository that exposes the fetch/store methods but declines both at
    /// runtime, e.g. because its backend is read-only right now.
    struct DecliningRepository;

    #[async_trait]
    impl Fetcher for DecliningRepository {
        async fn fetch(&self, _options: &FetchOptions) -> Result<Vec<EnvelopeRef>> {
            Err(Error::FetcherMethodNotImplemented)
        }
    }

    #[async_trait]
    impl Storer for DecliningRepository {
        async fn store(&self, _options: &StoreOptions, _envelopes: &[EnvelopeRef]) -> Result<()> {
            Err(Error::StorerMethodNotImplemented)
        }
    }

    impl Repository for DecliningRepository {
        fn capabilities(&self) -> Capabilities {
            Capabilities {
                fetch: true,
                store: true,
                ..Capabilities::default()
            }
        }

        fn fetcher(&self) -> Option<&dyn Fetcher> {
            Some(self)
        }

        fn storer(&self) -> Option<&dyn Storer> {
            Some(self)
        }
    }

    #[tokio::test]
    async fn test_exposed_but_declined_methods_use_reserved_errors() {
        let repo = DecliningRepository;

        let fetched = repo.fetcher().unwrap().fetch(&FetchOptions::new()).await;
        assert!(matches!(
            fetched,
            Err(Error::FetcherMethodNotImplemented)
        ));

        let stored = repo
            .storer()
            .unwrap()
            .store(&StoreOptions::new(), &[])
            .await;
        assert!(matches!(
            stored.unwrap_err(),
            Error::StorerMethodNotImplemented
        ));
    }

    #[test]
    fn test_default_accessors_advertise_nothing() {
        struct Bare;
        impl Repository for Bare {
            fn capabilities(&self) -> Capabilities {
                Capabilities::default()
            }
        }

        let repo = Bare;
        assert!(repo.fetcher().is_none());
        assert!(repo.fetcher_by_subject().is_none());
        assert!(repo.fetcher_by_predicate_type().is_none());
        assert!(repo.fetcher_by_predicate_type_and_subject().is_none());
        assert!(repo.storer().is_none());
        assert_eq!(repo.capabilities(), Capabilities::default());
    }
}
