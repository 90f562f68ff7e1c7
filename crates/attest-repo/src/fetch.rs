//! Capability-preferring fetch
//!
//! [`fetch_filtered`] selects the most specific fetching capability a
//! repository advertises for a predicate-type/subject request, and makes up
//! for whatever the backend could not narrow natively by filtering
//! client-side with the query engine. Results are identical either way; the
//! difference is how much data leaves the storage layer.

use crate::error::{Error, Result};
use crate::options::FetchOptions;
use crate::repository::Repository;
use attest_query::{FilterSet, PredicateTypeFilter, QueryOptions, SubjectFilter};
use attest_types::{EnvelopeRef, PredicateType, Subject};

/// Fetch the envelopes matching the given predicate types and subjects.
///
/// Empty `predicate_types` / `subjects` slices mean "no constraint" on that
/// axis. The options' query and limit are always honored, whether the
/// narrowing happened natively or client-side. Fails with
/// [`Error::FetcherMethodNotImplemented`] when the repository advertises no
/// fetching capability at all.
pub async fn fetch_filtered(
    repository: &dyn Repository,
    options: &FetchOptions,
    predicate_types: &[PredicateType],
    subjects: &[Subject],
) -> Result<Vec<EnvelopeRef>> {
    let wants_types = !predicate_types.is_empty();
    let wants_subjects = !subjects.is_empty();

    // Options for a partial-pushdown fetch: the caller's query and limit
    // only apply after the residual filtering below.
    let coarse = FetchOptions::new();

    let mut residual_types = false;
    let mut residual_subjects = false;

    let fetched = if wants_types && wants_subjects {
        if let Some(fetcher) = repository.fetcher_by_predicate_type_and_subject() {
            return fetcher
                .fetch_by_predicate_type_and_subject(options, predicate_types, subjects)
                .await;
        } else if let Some(fetcher) = repository.fetcher_by_subject() {
            residual_types = true;
            fetcher.fetch_by_subject(&coarse, subjects).await?
        } else if let Some(fetcher) = repository.fetcher_by_predicate_type() {
            residual_subjects = true;
            fetcher
                .fetch_by_predicate_type(&coarse, predicate_types)
                .await?
        } else if let Some(fetcher) = repository.fetcher() {
            residual_types = true;
            residual_subjects = true;
            fetcher.fetch(&coarse).await?
        } else {
            return Err(Error::FetcherMethodNotImplemented);
        }
    } else if wants_subjects {
        if let Some(fetcher) = repository.fetcher_by_subject() {
            return fetcher.fetch_by_subject(options, subjects).await;
        } else if let Some(fetcher) = repository.fetcher() {
            residual_subjects = true;
            fetcher.fetch(&coarse).await?
        } else {
            return Err(Error::FetcherMethodNotImplemented);
        }
    } else if wants_types {
        if let Some(fetcher) = repository.fetcher_by_predicate_type() {
            return fetcher
                .fetch_by_predicate_type(options, predicate_types)
                .await;
        } else if let Some(fetcher) = repository.fetcher() {
            residual_types = true;
            fetcher.fetch(&coarse).await?
        } else {
            return Err(Error::FetcherMethodNotImplemented);
        }
    } else {
        let fetcher = repository
            .fetcher()
            .ok_or(Error::FetcherMethodNotImplemented)?;
        return fetcher.fetch(options).await;
    };

    tracing::debug!(
        fetched = fetched.len(),
        residual_types,
        residual_subjects,
        "narrowing fetched envelopes client-side"
    );

    let mut residual = FilterSet::new();
    if residual_types {
        residual.push(Box::new(PredicateTypeFilter::any_of(
            predicate_types.iter().cloned(),
        )));
    }
    if residual_subjects {
        residual.push(Box::new(SubjectFilter::any_of(subjects.to_vec())));
    }

    let mut result = residual.filter_list(&fetched, &QueryOptions::new());
    if let Some(query) = &options.query {
        result = query.run(&result, &QueryOptions::new());
    }
    if options.limit > 0 && result.len() > options.limit {
        result.truncate(options.limit);
    }
    Ok(result)
}
