//! Envelopes: the verifiable unit of exchange
//!
//! An envelope bundles a statement, its signatures and all verification
//! material behind one surface, so callers can verify and query attestations
//! without knowing which concrete signing or encoding scheme produced them.
//! Envelopes are created by parser collaborators (or synthetically in tests)
//! and are immutable afterwards.

use crate::error::{Error, Result};
use crate::predicate::Predicate;
use crate::signature::{Certificate, Signature};
use crate::statement::Statement;
use crate::verification::Verification;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handle to an envelope.
///
/// Envelopes never change after construction, so collections hand them
/// around as cheap clones of this handle instead of copying payloads.
pub type EnvelopeRef = Arc<dyn Envelope>;

/// A single option accepted by [`Envelope::verify`].
///
/// The switches every scheme understands are explicit variants;
/// scheme-specific knobs travel as an opaque payload keyed by scheme
/// identifier.
#[derive(Debug, Clone)]
pub enum VerifyOption {
    /// Let envelopes without any signature pass the gate.
    AllowUnsigned(bool),
    /// Scheme-specific option payload.
    Custom {
        /// Identifier of the scheme the payload is meant for
        scheme: String,
        /// The payload itself, opaque to the core
        value: serde_json::Value,
    },
}

/// Resolved form of a list of [`VerifyOption`]s.
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Whether signatureless envelopes pass verification
    pub allow_unsigned: bool,
    /// Scheme-specific payloads, keyed by scheme identifier
    pub custom: BTreeMap<String, serde_json::Value>,
}

impl VerifyOptions {
    /// Fold a list of options into their resolved form. Later options win
    /// over earlier ones.
    pub fn from_options(options: &[VerifyOption]) -> Self {
        let mut resolved = Self::default();
        for option in options {
            match option {
                VerifyOption::AllowUnsigned(allow) => resolved.allow_unsigned = *allow,
                VerifyOption::Custom { scheme, value } => {
                    resolved.custom.insert(scheme.clone(), value.clone());
                }
            }
        }
        resolved
    }
}

/// Adapts generic verification material into scheme-specific verify options
/// without the caller knowing concrete envelope types.
pub trait ToVerificationOptions {
    /// Render this object as a list of verify options.
    fn to_verification_options(&self) -> Vec<VerifyOption>;
}

/// The unit of exchange and the unit the query engine operates over.
pub trait Envelope: Send + Sync {
    /// The wrapped statement.
    fn statement(&self) -> &Statement;

    /// The statement's predicate. Denormalized accessor, always the same
    /// value as `statement().predicate()`.
    fn predicate(&self) -> &Predicate {
        self.statement().predicate()
    }

    /// Signatures protecting the statement, in the order they were attached.
    fn signatures(&self) -> &[Signature];

    /// Certificate material, when the scheme carries any.
    fn certificate(&self) -> Option<&Certificate> {
        None
    }

    /// Outcome of the verification performed when the envelope was created.
    fn verification(&self) -> Option<&Verification>;

    /// Verify the envelope.
    ///
    /// This is the universal gate shared by every scheme: an envelope
    /// without signatures fails with [`Error::UnsignedEnvelope`] unless
    /// [`VerifyOption::AllowUnsigned`] says otherwise; everything else is
    /// delegated to the scheme through [`Envelope::verify_signatures`].
    fn verify(&self, options: &[VerifyOption]) -> Result<()> {
        let resolved = VerifyOptions::from_options(options);
        if self.signatures().is_empty() {
            if resolved.allow_unsigned {
                return Ok(());
            }
            return Err(Error::UnsignedEnvelope);
        }
        self.verify_signatures(&resolved)
    }

    /// Scheme-specific signature check, called by [`Envelope::verify`] once
    /// the universal gate has passed. Implementations report bad signatures
    /// as [`Error::InvalidSignature`].
    fn verify_signatures(&self, options: &VerifyOptions) -> Result<()>;
}

/// Envelope for statements that arrive outside any signing wrapper, or whose
/// signatures were checked upstream.
///
/// `BareEnvelope` performs no cryptography of its own: verifying one
/// consumes the [`Verification`] attached at construction time.
#[derive(Debug)]
pub struct BareEnvelope {
    statement: Statement,
    signatures: Vec<Signature>,
    certificate: Option<Certificate>,
    verification: Option<Verification>,
}

impl BareEnvelope {
    /// Wrap a statement with no signatures or verification material.
    pub fn new(statement: Statement) -> Self {
        Self {
            statement,
            signatures: Vec::new(),
            certificate: None,
            verification: None,
        }
    }

    /// Attach a signature.
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signatures.push(signature);
        self
    }

    /// Attach certificate material.
    pub fn with_certificate(mut self, certificate: Certificate) -> Self {
        self.certificate = Some(certificate);
        self
    }

    /// Attach the verification outcome computed by the upstream verifier.
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = Some(verification);
        self
    }

    /// Finish construction and return the shared handle form.
    pub fn into_ref(self) -> EnvelopeRef {
        Arc::new(self)
    }
}

impl Envelope for BareEnvelope {
    fn statement(&self) -> &Statement {
        &self.statement
    }

    fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    fn verify_signatures(&self, _options: &VerifyOptions) -> Result<()> {
        match &self.verification {
            Some(v) if v.verified() => Ok(()),
            Some(_) => Err(Error::InvalidSignature(
                "upstream verifier reported the signatures as invalid".to_string(),
            )),
            None => Err(Error::InvalidSignature(
                "no verification outcome attached to a signed envelope".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::Subject;

    fn sample_statement() -> Statement {
        Statement::new(
            vec![Subject::new("app")
                .with_digest("sha256", "abc123")
                .with_digest("sha512", "def456")],
            Predicate::new("https://slsa.dev/provenance/v1"),
        )
    }

    #[test]
    fn test_unsigned_envelope_fails_by_default() {
        let envelope = BareEnvelope::new(sample_statement());
        let err = envelope.verify(&[]).unwrap_err();
        assert!(matches!(err, Error::UnsignedEnvelope));
    }

    #[test]
    fn test_unsigned_envelope_passes_when_allowed() {
        let envelope = BareEnvelope::new(sample_statement());
        envelope
            .verify(&[VerifyOption::AllowUnsigned(true)])
            .unwrap();
    }

    #[test]
    fn test_signed_envelope_consumes_attached_verification() {
        let good = BareEnvelope::new(sample_statement())
            .with_signature(Signature::new("dsse", b"sig".to_vec()))
            .with_verification(Verification::new(true));
        good.verify(&[]).unwrap();

        let bad = BareEnvelope::new(sample_statement())
            .with_signature(Signature::new("dsse", b"sig".to_vec()))
            .with_verification(Verification::new(false));
        assert!(matches!(
            bad.verify(&[]).unwrap_err(),
            Error::InvalidSignature(_)
        ));
    }

    #[test]
    fn test_signed_envelope_without_verification_fails() {
        let envelope = BareEnvelope::new(sample_statement())
            .with_signature(Signature::new("dsse", b"sig".to_vec()));
        assert!(matches!(
            envelope.verify(&[]).unwrap_err(),
            Error::InvalidSignature(_)
        ));
    }

    #[test]
    fn test_predicate_accessor_matches_statement() {
        let envelope = BareEnvelope::new(sample_statement());
        assert_eq!(
            envelope.predicate().predicate_type(),
            envelope.statement().predicate().predicate_type()
        );
    }

    #[test]
    fn test_verification_material_adapts_into_options() {
        /// Stand-in for a scheme's verification material.
        struct TrustAnchors {
            allow_unsigned: bool,
        }

        impl ToVerificationOptions for TrustAnchors {
            fn to_verification_options(&self) -> Vec<VerifyOption> {
                vec![
                    VerifyOption::AllowUnsigned(self.allow_unsigned),
                    VerifyOption::Custom {
                        scheme: "x509".to_string(),
                        value: serde_json::json!({"roots": 2}),
                    },
                ]
            }
        }

        let envelope = BareEnvelope::new(sample_statement());
        let material = TrustAnchors {
            allow_unsigned: true,
        };
        envelope.verify(&material.to_verification_options()).unwrap();

        let strict = TrustAnchors {
            allow_unsigned: false,
        };
        assert!(matches!(
            envelope.verify(&strict.to_verification_options()).unwrap_err(),
            Error::UnsignedEnvelope
        ));
    }

    #[test]
    fn test_verify_options_resolution() {
        let resolved = VerifyOptions::from_options(&[
            VerifyOption::AllowUnsigned(true),
            VerifyOption::Custom {
                scheme: "dsse".to_string(),
                value: serde_json::json!({"threshold": 2}),
            },
            VerifyOption::AllowUnsigned(false),
        ]);
        // Later options win.
        assert!(!resolved.allow_unsigned);
        assert_eq!(resolved.custom["dsse"]["threshold"], 2);
    }
}
