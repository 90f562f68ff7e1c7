//! Subjects: the artifacts an attestation speaks about
//!
//! A subject follows the shape of the in-toto resource descriptor: a name,
//! an optional URI and a set of digests keyed by algorithm. Matching two
//! subjects by digest is the sole gate between "this artifact is the one
//! named in the attestation" and "it is not", so the rules in
//! [`subjects_match`] are deliberately strict.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Digests keyed by algorithm name (`"sha256"`, `"sha512"`, ...), values
/// hex-encoded.
pub type DigestSet = BTreeMap<String, String>;

/// A piece of software covered by an attestation.
///
/// Subjects are immutable once constructed; build them with [`Subject::new`]
/// and the `with_*` methods.
///
/// # Example
///
/// ```
/// use attest_types::Subject;
///
/// let subject = Subject::new("registry.example.com/app")
///     .with_uri("oci://registry.example.com/app@sha256:1f2a")
///     .with_digest("sha256", "1f2a54c9")
///     .with_digest("sha512", "9b71d224");
/// assert_eq!(subject.digest().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    uri: String,
    #[serde(default)]
    digest: DigestSet,
}

impl Subject {
    /// Create a subject with the given name and no digests.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: String::new(),
            digest: DigestSet::new(),
        }
    }

    /// Set the subject's URI.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Add a single digest entry. Re-adding an algorithm replaces its value.
    pub fn with_digest(mut self, algorithm: impl Into<String>, value: impl Into<String>) -> Self {
        self.digest.insert(algorithm.into(), value.into());
        self
    }

    /// Replace the whole digest set.
    pub fn with_digests(mut self, digests: DigestSet) -> Self {
        self.digest = digests;
        self
    }

    /// The subject's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subject's URI, empty when not set.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The subject's digests, keyed by algorithm.
    pub fn digest(&self) -> &DigestSet {
        &self.digest
    }
}

/// Compare two subjects by digest and report whether `b` corroborates `a`.
///
/// The comparison walks `a`'s algorithms and looks each one up in `b`:
///
/// - if `a` carries no digests at all the answer is `false`; an unkeyed
///   subject can never be confirmed;
/// - if any algorithm present in both sets disagrees, the answer is `false`
///   immediately, no partial credit;
/// - otherwise the answer is `true` only when strictly more than one common
///   algorithm agrees. A single shared hash, even a matching one, is not
///   enough to call two subjects the same artifact: one agreeing algorithm
///   leaves the match exposed to a single-algorithm collision.
///
/// The arguments are not interchangeable: `a` is the subject being claimed
/// and `b` the subject corroborating it. With well-formed subjects the
/// outcome is the same either way, but callers should keep the intended
/// order.
pub fn subjects_match(a: &Subject, b: &Subject) -> bool {
    let digests_a = a.digest();
    if digests_a.is_empty() {
        return false;
    }

    let digests_b = b.digest();
    let mut common = 0;
    for (algorithm, value_a) in digests_a {
        if let Some(value_b) = digests_b.get(algorithm) {
            if value_a != value_b {
                return false;
            }
            common += 1;
        }
    }
    common > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(digests: &[(&str, &str)]) -> Subject {
        let mut s = Subject::new("test");
        for (algo, val) in digests {
            s = s.with_digest(*algo, *val);
        }
        s
    }

    #[test]
    fn test_empty_digest_never_matches() {
        let empty = subject(&[]);
        let keyed = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        assert!(!subjects_match(&empty, &keyed));
        assert!(!subjects_match(&empty, &empty));
    }

    #[test]
    fn test_single_common_algorithm_is_insufficient() {
        let a = subject(&[("sha256", "abc123")]);
        let b = subject(&[("sha256", "abc123")]);
        assert!(!subjects_match(&a, &b));

        // Still only one common algorithm even though a has two.
        let a = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        let b = subject(&[("sha256", "abc123")]);
        assert!(!subjects_match(&a, &b));
    }

    #[test]
    fn test_two_agreeing_algorithms_match() {
        let a = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        let b = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        assert!(subjects_match(&a, &b));
    }

    #[test]
    fn test_superset_matches_when_common_agree() {
        let a = subject(&[("sha256", "abc123"), ("sha512", "def456"), ("md5", "ghi789")]);
        let b = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        assert!(subjects_match(&a, &b));
    }

    #[test]
    fn test_any_disagreement_forces_false() {
        let a = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        let b = subject(&[("sha256", "abc123"), ("sha512", "zzz999")]);
        assert!(!subjects_match(&a, &b));
    }

    #[test]
    fn test_disjoint_algorithms_never_match() {
        let a = subject(&[("sha256", "abc123")]);
        let b = subject(&[("sha512", "def456")]);
        assert!(!subjects_match(&a, &b));
    }

    #[test]
    fn test_partial_overlap_with_agreement() {
        let a = subject(&[("sha256", "abc123"), ("sha512", "def456"), ("sha1", "aa11")]);
        let b = subject(&[("sha256", "abc123"), ("sha1", "aa11"), ("md5", "ghi789")]);
        assert!(subjects_match(&a, &b));
    }

    #[test]
    fn test_self_match_needs_two_algorithms() {
        let one = subject(&[("sha256", "abc123")]);
        assert!(!subjects_match(&one, &one));

        let two = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        assert!(subjects_match(&two, &two));
    }

    #[test]
    fn test_match_is_deterministic() {
        let a = subject(&[("sha256", "abc123"), ("sha512", "def456")]);
        let b = subject(&[("sha256", "abc123"), ("sha512", "def456"), ("md5", "x")]);
        let first = subjects_match(&a, &b);
        for _ in 0..10 {
            assert_eq!(subjects_match(&a, &b), first);
        }
    }

    #[test]
    fn test_subject_serde_shape() {
        let subject = Subject::new("app.tar.gz")
            .with_uri("https://example.com/app.tar.gz")
            .with_digest("sha256", "abc123");
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["name"], "app.tar.gz");
        assert_eq!(json["uri"], "https://example.com/app.tar.gz");
        assert_eq!(json["digest"]["sha256"], "abc123");

        let parsed: Subject = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, subject);
    }

    #[test]
    fn test_subject_serde_omits_empty_uri() {
        let subject = Subject::new("app").with_digest("sha256", "abc123");
        let json = serde_json::to_string(&subject).unwrap();
        assert!(!json.contains("uri"));
    }
}
