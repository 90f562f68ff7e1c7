//! Built-in filters
//!
//! Concrete matching criteria are collaborator territory; the handful here
//! cover the selections nearly every caller needs: by predicate type, by
//! subject digest, by verification status and by signer identity. They also
//! serve as the reference for writing new [`Filter`] implementations.

use crate::query::Filter;
use attest_types::{subjects_match, Envelope, Identity, PredicateType, Subject};

/// Matches envelopes whose predicate carries one of the wanted types.
#[derive(Debug, Default)]
pub struct PredicateTypeFilter {
    types: Vec<PredicateType>,
}

impl PredicateTypeFilter {
    /// Filter for a single predicate type.
    pub fn new(predicate_type: impl Into<PredicateType>) -> Self {
        Self {
            types: vec![predicate_type.into()],
        }
    }

    /// Filter for any of the given types.
    pub fn any_of<I, T>(predicate_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PredicateType>,
    {
        Self {
            types: predicate_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Add another accepted type.
    pub fn or_type(mut self, predicate_type: impl Into<PredicateType>) -> Self {
        self.types.push(predicate_type.into());
        self
    }
}

impl Filter for PredicateTypeFilter {
    fn matches(&self, envelope: &dyn Envelope) -> bool {
        let actual = envelope.predicate().predicate_type();
        self.types.iter().any(|wanted| wanted == actual)
    }
}

/// Matches envelopes whose statement covers one of the wanted subjects,
/// decided by digest corroboration (see [`subjects_match`]).
#[derive(Debug, Default)]
pub struct SubjectFilter {
    subjects: Vec<Subject>,
}

impl SubjectFilter {
    /// Filter for a single subject.
    pub fn new(subject: Subject) -> Self {
        Self {
            subjects: vec![subject],
        }
    }

    /// Filter for any of the given subjects.
    pub fn any_of(subjects: impl IntoIterator<Item = Subject>) -> Self {
        Self {
            subjects: subjects.into_iter().collect(),
        }
    }

    /// The subjects this filter looks for.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }
}

impl Filter for SubjectFilter {
    fn matches(&self, envelope: &dyn Envelope) -> bool {
        self.subjects.iter().any(|wanted| {
            envelope
                .statement()
                .subjects()
                .iter()
                .any(|covered| subjects_match(wanted, covered))
        })
    }
}

/// Matches envelopes whose attached verification outcome reports success.
/// Envelopes without a verification outcome never match.
#[derive(Debug, Default)]
pub struct VerifiedFilter;

impl VerifiedFilter {
    /// Create the filter.
    pub fn new() -> Self {
        Self
    }
}

impl Filter for VerifiedFilter {
    fn matches(&self, envelope: &dyn Envelope) -> bool {
        envelope
            .verification()
            .map(|verification| verification.verified())
            .unwrap_or(false)
    }
}

/// Matches verified envelopes whose signer matches the wanted identity.
#[derive(Debug)]
pub struct IdentityFilter {
    identity: Identity,
}

impl IdentityFilter {
    /// Filter for the given identity.
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

impl Filter for IdentityFilter {
    fn matches(&self, envelope: &dyn Envelope) -> bool {
        envelope
            .verification()
            .map(|verification| {
                verification.verified() && verification.matches_identity(&self.identity)
            })
            .unwrap_or(false)
    }
}
