//! Verification outcomes
//!
//! The core never performs cryptographic checks. Signer/verifier
//! collaborators run them when an envelope is parsed and attach a
//! [`Verification`] describing the outcome; everything downstream only reads
//! that result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Identity a caller wants to check a verified signature against.
///
/// The common fields cover certificate-based signing identities; anything
/// scheme-specific travels in `claims`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Issuer of the signing identity (e.g. an OIDC issuer URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// The signing identity itself (e.g. a certificate SAN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Identifier of the signing key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    /// Scheme-specific claims that do not fit the common fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub claims: BTreeMap<String, String>,
}

impl Identity {
    /// Create an empty identity descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the identity subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the signing key identifier.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Add a scheme-specific claim.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }
}

/// Capability to decide whether a verified signature was produced by a given
/// identity. Attached to a [`Verification`] by the verifier collaborator.
pub trait IdentityMatcher: Send + Sync {
    /// Return true when the verified material matches `identity`.
    fn matches_identity(&self, identity: &Identity) -> bool;
}

impl<F> IdentityMatcher for F
where
    F: Fn(&Identity) -> bool + Send + Sync,
{
    fn matches_identity(&self, identity: &Identity) -> bool {
        self(identity)
    }
}

/// Outcome of a verification process performed elsewhere.
///
/// A `Verification` is fixed when the envelope is created and never
/// re-derived. Without an attached matcher, [`matches_identity`] answers
/// `false` for every identity.
///
/// [`matches_identity`]: Verification::matches_identity
#[derive(Clone, Default)]
pub struct Verification {
    verified: bool,
    matcher: Option<Arc<dyn IdentityMatcher>>,
}

impl Verification {
    /// Create a verification outcome.
    pub fn new(verified: bool) -> Self {
        Self {
            verified,
            matcher: None,
        }
    }

    /// Attach an identity matcher.
    pub fn with_matcher(mut self, matcher: Arc<dyn IdentityMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Whether the verification succeeded.
    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Whether the verified signature matches `identity`. Answers `false`
    /// when no matcher was attached.
    pub fn matches_identity(&self, identity: &Identity) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.matches_identity(identity),
            None => false,
        }
    }
}

impl fmt::Debug for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verification")
            .field("verified", &self.verified)
            .field("has_matcher", &self.matcher.is_some())
            .finish()
    }
}
