//! Parser capability contracts
//!
//! Raw bytes become envelopes, statements and predicates through the traits
//! defined here. The core consumes these contracts; the codecs that
//! implement them (DSSE, JWT, bare JSON statements, ...) live in collaborator
//! crates and attach verification outcomes to whatever they produce. A
//! parser handed bytes in a format it does not understand answers
//! [`Error::NotCorrectFormat`] so the caller can try the next one.

pub mod error;

pub use error::{Error, Result};

use attest_types::{EnvelopeRef, Predicate, PredicateType, Statement};
use std::io::Read;

/// Reads a byte stream and returns the attestation envelopes it contains.
///
/// It is the parser's job to run any signature or certificate checks its
/// format defines and attach the resulting verification outcome to the
/// envelopes it returns; nothing downstream re-verifies.
pub trait EnvelopeParser: Send + Sync {
    /// Parse every envelope in the stream.
    fn parse_stream(&self, reader: &mut dyn Read) -> Result<Vec<EnvelopeRef>>;

    /// File extensions (without the dot) conventionally holding this
    /// format, for format dispatch by callers.
    fn file_extensions(&self) -> &[&str];

    /// Convenience wrapper to parse an in-memory slice.
    fn parse(&self, data: &[u8]) -> Result<Vec<EnvelopeRef>> {
        let mut reader = data;
        self.parse_stream(&mut reader)
    }
}

/// Parses the bytes of a single statement.
pub trait StatementParser: Send + Sync {
    /// Parse a statement from raw bytes.
    fn parse(&self, data: &[u8]) -> Result<Statement>;
}

/// Parses the bytes of a predicate into its typed form.
pub trait PredicateParser: Send + Sync {
    /// Parse a predicate from raw bytes.
    fn parse(&self, data: &[u8]) -> Result<Predicate>;

    /// Whether this parser understands all of the given predicate types.
    /// Callers probe before attempting a parse.
    fn supports_type(&self, predicate_types: &[PredicateType]) -> bool;
}
