//! Error types for the attestation data model

use crate::predicate::PredicateType;
use thiserror::Error;

/// Result type alias using this crate's error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the attestation data model
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The envelope carries no signatures and unsigned envelopes were not
    /// explicitly allowed when verifying.
    #[error("envelope has no signatures attached")]
    UnsignedEnvelope,

    /// The verifying collaborator reported the envelope's signatures as
    /// invalid.
    #[error("signature verification failed: {0}")]
    InvalidSignature(String),

    /// A predicate was asked to change its type after its data had already
    /// been parsed under the current type.
    #[error("cannot retype predicate from {from} to {to}: data already parsed")]
    InvalidTypeTransition {
        /// Type the predicate currently carries
        from: PredicateType,
        /// Type the caller attempted to set
        to: PredicateType,
    },
}
