//! Opaque signature and certificate material
//!
//! The core never interprets these bytes; it only moves them between the
//! parser that produced them and the verifier that consumes them. Each blob
//! is tagged with the identifier of the scheme that knows how to read it.

/// A signature over a statement, tagged with its scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    scheme: String,
    key_id: String,
    data: Vec<u8>,
}

impl Signature {
    /// Create a signature blob for the given scheme.
    pub fn new(scheme: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            scheme: scheme.into(),
            key_id: String::new(),
            data: data.into(),
        }
    }

    /// Attach a key identifier hint.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = key_id.into();
        self
    }

    /// Identifier of the scheme that produced the signature.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Key identifier hint, empty when not set.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The raw signature bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Certificate material (e.g. a DER blob), tagged with its scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    scheme: String,
    data: Vec<u8>,
}

impl Certificate {
    /// Create a certificate blob for the given scheme.
    pub fn new(scheme: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            scheme: scheme.into(),
            data: data.into(),
        }
    }

    /// Identifier of the scheme that knows how to read the certificate.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The raw certificate bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
