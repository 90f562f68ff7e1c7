//! Statements: subjects bound to a predicate
//!
//! A statement mirrors the in-toto statement: an ordered list of subjects,
//! the predicate claimed about them, and the verification outcome attached
//! when the statement was parsed.

use crate::predicate::{Predicate, PredicateType};
use crate::subject::Subject;
use crate::verification::Verification;

/// Type URI of in-toto v1 statements.
pub const STATEMENT_TYPE_V1: &str = "https://in-toto.io/Statement/v1";

/// A claim that a predicate holds for a set of subjects.
///
/// Well-formed statements carry at least one subject; producing parsers are
/// responsible for rejecting subjectless input. Duplicate subjects (by
/// digest) are permitted but discouraged.
///
/// The statement's predicate type is always read from the owned predicate,
/// so the two can never disagree.
#[derive(Debug)]
pub struct Statement {
    statement_type: String,
    subjects: Vec<Subject>,
    predicate: Predicate,
    verification: Option<Verification>,
}

impl Statement {
    /// Create a statement of the default in-toto v1 type.
    pub fn new(subjects: Vec<Subject>, predicate: Predicate) -> Self {
        Self {
            statement_type: STATEMENT_TYPE_V1.to_string(),
            subjects,
            predicate,
            verification: None,
        }
    }

    /// Override the statement type URI.
    pub fn with_type(mut self, statement_type: impl Into<String>) -> Self {
        self.statement_type = statement_type.into();
        self
    }

    /// Attach a verification outcome.
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = Some(verification);
        self
    }

    /// The statement type URI.
    pub fn statement_type(&self) -> &str {
        &self.statement_type
    }

    /// The subjects the statement speaks about, in order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// The type of the carried predicate.
    pub fn predicate_type(&self) -> &PredicateType {
        self.predicate.predicate_type()
    }

    /// The carried predicate.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Mutable access to the predicate, for the parser collaborator that is
    /// still assembling the statement.
    pub fn predicate_mut(&mut self) -> &mut Predicate {
        &mut self.predicate
    }

    /// Verification outcome attached at parse time, if any.
    pub fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    /// Attach a verification outcome.
    pub fn set_verification(&mut self, verification: Verification) {
        self.verification = Some(verification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_statement() -> Statement {
        Statement::new(
            vec![Subject::new("app.tar.gz")
                .with_digest("sha256", "abc123")
                .with_digest("sha512", "def456")],
            Predicate::new("https://slsa.dev/provenance/v1").with_data(b"{}".to_vec()),
        )
    }

    #[test]
    fn test_statement_defaults_to_v1_type() {
        let statement = sample_statement();
        assert_eq!(statement.statement_type(), STATEMENT_TYPE_V1);
        assert_eq!(statement.subjects().len(), 1);
    }

    #[test]
    fn test_predicate_type_always_agrees_with_predicate() {
        let mut statement = sample_statement();
        assert_eq!(
            statement.predicate_type(),
            statement.predicate().predicate_type()
        );

        statement
            .predicate_mut()
            .set_type("https://slsa.dev/provenance/v2")
            .unwrap();
        assert_eq!(
            statement.predicate_type().as_str(),
            "https://slsa.dev/provenance/v2"
        );
        assert_eq!(
            statement.predicate_type(),
            statement.predicate().predicate_type()
        );
    }

    #[test]
    fn test_statement_verification() {
        let statement = sample_statement().with_verification(Verification::new(true));
        assert!(statement.verification().unwrap().verified());
    }
}
