//! In-memory repository
//!
//! Keeps every envelope in process memory. It implements the full
//! capability set, which makes it both the reference for how the contracts
//! compose and the storage double the workspace tests run against.

use crate::error::Result;
use crate::options::{FetchOptions, StoreOptions};
use crate::repository::{
    Capabilities, Fetcher, FetcherByPredicateType, FetcherByPredicateTypeAndSubject,
    FetcherBySubject, Repository, Storer,
};
use async_trait::async_trait;
use attest_query::{Filter, PredicateTypeFilter, QueryOptions, SubjectFilter};
use attest_types::{EnvelopeRef, PredicateType, Subject};
use std::sync::RwLock;

/// A repository backed by a vector behind a read/write lock.
#[derive(Default)]
pub struct InMemoryRepository {
    envelopes: RwLock<Vec<EnvelopeRef>>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored envelopes.
    pub fn len(&self) -> usize {
        self.read_store().len()
    }

    /// Whether the repository holds no envelopes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_store(&self) -> Vec<EnvelopeRef> {
        match self.envelopes.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply the caller's query, then the limit, to an already-narrowed
    /// list.
    fn apply_options(options: &FetchOptions, envelopes: Vec<EnvelopeRef>) -> Vec<EnvelopeRef> {
        let mut result = match &options.query {
            Some(query) => query.run(&envelopes, &QueryOptions::new()),
            None => envelopes,
        };
        if options.limit > 0 && result.len() > options.limit {
            result.truncate(options.limit);
        }
        result
    }
}

#[async_trait]
impl Fetcher for InMemoryRepository {
    async fn fetch(&self, options: &FetchOptions) -> Result<Vec<EnvelopeRef>> {
        Ok(Self::apply_options(options, self.read_store()))
    }
}

#[async_trait]
impl FetcherBySubject for InMemoryRepository {
    async fn fetch_by_subject(
        &self,
        options: &FetchOptions,
        subjects: &[Subject],
    ) -> Result<Vec<EnvelopeRef>> {
        let filter = SubjectFilter::any_of(subjects.to_vec());
        let narrowed = self
            .read_store()
            .into_iter()
            .filter(|envelope| filter.matches(envelope.as_ref()))
            .collect();
        Ok(Self::apply_options(options, narrowed))
    }
}

#[async_trait]
impl FetcherByPredicateType for InMemoryRepository {
    async fn fetch_by_predicate_type(
        &self,
        options: &FetchOptions,
        predicate_types: &[PredicateType],
    ) -> Result<Vec<EnvelopeRef>> {
        let filter = PredicateTypeFilter::any_of(predicate_types.iter().cloned());
        let narrowed = self
            .read_store()
            .into_iter()
            .filter(|envelope| filter.matches(envelope.as_ref()))
            .collect();
        Ok(Self::apply_options(options, narrowed))
    }
}

#[async_trait]
impl FetcherByPredicateTypeAndSubject for InMemoryRepository {
    async fn fetch_by_predicate_type_and_subject(
        &self,
        options: &FetchOptions,
        predicate_types: &[PredicateType],
        subjects: &[Subject],
    ) -> Result<Vec<EnvelopeRef>> {
        let type_filter = PredicateTypeFilter::any_of(predicate_types.iter().cloned());
        let subject_filter = SubjectFilter::any_of(subjects.to_vec());
        let narrowed = self
            .read_store()
            .into_iter()
            .filter(|envelope| {
                type_filter.matches(envelope.as_ref()) && subject_filter.matches(envelope.as_ref())
            })
            .collect();
        Ok(Self::apply_options(options, narrowed))
    }
}

#[async_trait]
impl Storer for InMemoryRepository {
    async fn store(&self, _options: &StoreOptions, envelopes: &[EnvelopeRef]) -> Result<()> {
        let mut store = match self.envelopes.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        store.extend(envelopes.iter().cloned());
        tracing::debug!(stored = envelopes.len(), total = store.len(), "stored envelopes");
        Ok(())
    }
}

impl Repository for InMemoryRepository {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            fetch: true,
            fetch_by_subject: true,
            fetch_by_predicate_type: true,
            fetch_by_predicate_type_and_subject: true,
            store: true,
        }
    }

    fn fetcher(&self) -> Option<&dyn Fetcher> {
        Some(self)
    }

    fn fetcher_by_subject(&self) -> Option<&dyn FetcherBySubject> {
        Some(self)
    }

    fn fetcher_by_predicate_type(&self) -> Option<&dyn FetcherByPredicateType> {
        Some(self)
    }

    fn fetcher_by_predicate_type_and_subject(
        &self,
    ) -> Option<&dyn FetcherByPredicateTypeAndSubject> {
        Some(self)
    }

    fn storer(&self) -> Option<&dyn Storer> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_query::{Query, VerifiedFilter};
    use attest_types::{BareEnvelope, Envelope, Predicate, Statement, Verification};

    fn envelope(name: &str, predicate_type: &str, verified: bool) -> EnvelopeRef {
        BareEnvelope::new(Statement::new(
            vec![Subject::new(name)
                .with_digest("sha256", format!("sha256-{name}"))
                .with_digest("sha512", format!("sha512-{name}"))],
            Predicate::new(predicate_type),
        ))
        .with_verification(Verification::new(verified))
        .into_ref()
    }

    async fn seeded() -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        repo.store(
            &StoreOptions::new(),
            &[
                envelope("app", "https://slsa.dev/provenance/v1", true),
                envelope("lib", "https://slsa.dev/provenance/v1", false),
                envelope("app", "https://example.com/vuln-scan/v1", true),
            ],
        )
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_store_then_fetch_everything() {
        let repo = seeded().await;
        assert_eq!(repo.len(), 3);
        let all = repo.fetch(&FetchOptions::new()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_honors_limit() {
        let repo = seeded().await;
        let limited = repo.fetch(&FetchOptions::new().with_limit(2)).await.unwrap();
        assert_eq!(limited.len(), 2);

        // Limit 0 means unbounded.
        let unbounded = repo.fetch(&FetchOptions::new().with_limit(0)).await.unwrap();
        assert_eq!(unbounded.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_applies_query_before_limit() {
        let repo = seeded().await;
        let options = FetchOptions::new()
            .with_query(Query::new().with_filter(VerifiedFilter::new()))
            .with_limit(1);
        let result = repo.fetch(&options).await.unwrap();
        // The unverified envelope sits between the two verified ones; the
        // query must drop it before the limit truncates.
        assert_eq!(result.len(), 1);
        assert!(result[0].verification().unwrap().verified());
        assert_eq!(result[0].statement().subjects()[0].name(), "app");
    }

    #[tokio::test]
    async fn test_fetch_by_subject_narrows_natively() {
        let repo = seeded().await;
        let wanted = Subject::new("app")
            .with_digest("sha256", "sha256-app")
            .with_digest("sha512", "sha512-app");
        let result = repo
            .fetch_by_subject(&FetchOptions::new(), &[wanted])
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
        for envelope in &result {
            assert_eq!(envelope.statement().subjects()[0].name(), "app");
        }
    }

    #[tokio::test]
    async fn test_fetch_by_predicate_type() {
        let repo = seeded().await;
        let result = repo
            .fetch_by_predicate_type(
                &FetchOptions::new(),
                &["https://slsa.dev/provenance/v1".into()],
            )
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_by_predicate_type_and_subject() {
        let repo = seeded().await;
        let wanted = Subject::new("app")
            .with_digest("sha256", "sha256-app")
            .with_digest("sha512", "sha512-app");
        let result = repo
            .fetch_by_predicate_type_and_subject(
                &FetchOptions::new(),
                &["https://slsa.dev/provenance/v1".into()],
                &[wanted],
            )
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].predicate().predicate_type().as_str(),
            "https://slsa.dev/provenance/v1"
        );
        assert_eq!(result[0].statement().subjects()[0].name(), "app");
    }

    #[tokio::test]
    async fn test_advertised_capabilities() {
        let repo = seeded().await;
        let caps = repo.capabilities();
        assert!(caps.fetch);
        assert!(caps.fetch_by_subject);
        assert!(caps.fetch_by_predicate_type);
        assert!(caps.fetch_by_predicate_type_and_subject);
        assert!(caps.store);
        assert!(repo.storer().is_some());
        assert!(repo.fetcher_by_predicate_type_and_subject().is_some());
    }
}
