//! Predicates: the typed claim payload inside a statement

use crate::error::{Error, Result};
use crate::subject::Subject;
use crate::verification::Verification;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Namespaced identifier of a predicate's schema, e.g.
/// `https://slsa.dev/provenance/v1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredicateType(String);

impl PredicateType {
    /// Create a predicate type from a type URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The type URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the type is empty (not yet assigned).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PredicateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PredicateType {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for PredicateType {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl AsRef<str> for PredicateType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The typed claim a statement makes about its subjects.
///
/// A predicate carries the raw claim bytes, optionally a decoded form of
/// them, and the origin/verification data the parser collaborator attaches
/// while constructing it. After construction the query engine treats all of
/// it as read-only; the only guarded mutation is [`Predicate::set_type`].
pub struct Predicate {
    predicate_type: PredicateType,
    data: Vec<u8>,
    parsed: Option<Box<dyn Any + Send + Sync>>,
    origin: Option<Subject>,
    verification: Option<Verification>,
}

impl Predicate {
    /// Create a predicate of the given type with no data.
    pub fn new(predicate_type: impl Into<PredicateType>) -> Self {
        Self {
            predicate_type: predicate_type.into(),
            data: Vec::new(),
            parsed: None,
            origin: None,
            verification: None,
        }
    }

    /// Attach the raw claim bytes.
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Attach the decoded form of the claim.
    pub fn with_parsed(mut self, parsed: Box<dyn Any + Send + Sync>) -> Self {
        self.parsed = Some(parsed);
        self
    }

    /// The predicate's type.
    pub fn predicate_type(&self) -> &PredicateType {
        &self.predicate_type
    }

    /// Change the predicate's type.
    ///
    /// Retyping is free while the predicate carries only raw bytes. Once a
    /// parsed form is attached the type is pinned to the one the data was
    /// decoded under: setting the identical type stays a no-op, anything
    /// else fails with [`Error::InvalidTypeTransition`].
    pub fn set_type(&mut self, predicate_type: impl Into<PredicateType>) -> Result<()> {
        let new_type = predicate_type.into();
        if self.parsed.is_some() && self.predicate_type != new_type {
            return Err(Error::InvalidTypeTransition {
                from: self.predicate_type.clone(),
                to: new_type,
            });
        }
        self.predicate_type = new_type;
        Ok(())
    }

    /// The raw claim bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The decoded claim, when a parser attached one.
    pub fn parsed(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.parsed.as_deref()
    }

    /// Downcast the decoded claim to a concrete type.
    pub fn parsed_as<T: Any>(&self) -> Option<&T> {
        self.parsed.as_deref()?.downcast_ref()
    }

    /// Attach the decoded form of the claim.
    pub fn set_parsed(&mut self, parsed: Box<dyn Any + Send + Sync>) {
        self.parsed = Some(parsed);
    }

    /// The subject this predicate was read from, when recorded.
    pub fn origin(&self) -> Option<&Subject> {
        self.origin.as_ref()
    }

    /// Record the subject this predicate was read from.
    pub fn set_origin(&mut self, origin: Subject) {
        self.origin = Some(origin);
    }

    /// Verification outcome attached by the parser, if any.
    pub fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    /// Attach a verification outcome.
    pub fn set_verification(&mut self, verification: Verification) {
        self.verification = Some(verification);
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("predicate_type", &self.predicate_type)
            .field("data_len", &self.data.len())
            .field("has_parsed", &self.parsed.is_some())
            .field("origin", &self.origin)
            .field("verification", &self.verification)
            .finish()
    }
}
