//! Parser error types

use thiserror::Error;

/// Result type alias using this crate's error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while parsing attestation material
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input bytes do not conform to this parser's format. Recoverable:
    /// the caller can hand the same bytes to another parser.
    #[error("data does not conform to parser's format")]
    NotCorrectFormat,

    /// Reading the input stream failed.
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes parsed but assembling the attestation failed.
    #[error(transparent)]
    Attestation(#[from] attest_types::Error),
}
