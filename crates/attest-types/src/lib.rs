//! Core data model for software attestations
//!
//! This crate defines the types an attestation framework moves around:
//! [`Subject`]s identify artifacts by digest, [`Statement`]s bind subjects to
//! a typed [`Predicate`], and [`Envelope`]s wrap a statement together with
//! its signatures and the [`Verification`] outcome computed when the
//! envelope was parsed.
//!
//! Nothing here touches cryptography, transport or storage: signature
//! checks, wire formats and repositories are collaborator concerns reached
//! through the traits defined in the sibling crates.
//!
//! # Example
//!
//! ```
//! use attest_types::{
//!     BareEnvelope, Envelope, Predicate, Statement, Subject, Verification, VerifyOption,
//! };
//!
//! let statement = Statement::new(
//!     vec![Subject::new("app.tar.gz")
//!         .with_digest("sha256", "1f2a54c9")
//!         .with_digest("sha512", "9b71d224")],
//!     Predicate::new("https://slsa.dev/provenance/v1").with_data(b"{}".to_vec()),
//! );
//!
//! let envelope = BareEnvelope::new(statement).with_verification(Verification::new(true));
//! envelope.verify(&[VerifyOption::AllowUnsigned(true)]).unwrap();
//! ```

pub mod envelope;
pub mod error;
pub mod predicate;
pub mod signature;
pub mod statement;
pub mod subject;
pub mod verification;

pub use envelope::{
    BareEnvelope, Envelope, EnvelopeRef, ToVerificationOptions, VerifyOption, VerifyOptions,
};
pub use error::{Error, Result};
pub use predicate::{Predicate, PredicateType};
pub use signature::{Certificate, Signature};
pub use statement::{Statement, STATEMENT_TYPE_V1};
pub use subject::{subjects_match, DigestSet, Subject};
pub use verification::{Identity, IdentityMatcher, Verification};
