//! Public keys for JWT signature verification
//!
//! Keys are opaque to this crate: the caller resolves them (usually from the
//! token's `kid`) and hands over the encoded bytes. The bytes are passed to
//! aws-lc-rs unchanged.

/// A public key that a token signature can be checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// RSA public key for RS256
    Rsa(RsaPublicKey),

    /// ECDSA public key for ES256, ES384 and ES512
    Ecdsa(EcdsaPublicKey),
}

impl PublicKey {
    /// Create an RSA public key from PKCS#1 `RSAPublicKey` or
    /// `SubjectPublicKeyInfo` DER
    pub fn rsa(der: impl Into<Vec<u8>>) -> Self {
        PublicKey::Rsa(RsaPublicKey::new(der.into()))
    }

    /// Create an ECDSA public key from an uncompressed SEC1 point
    /// (`04 || x || y`) or `SubjectPublicKeyInfo` DER
    pub fn ecdsa(bytes: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        PublicKey::Ecdsa(EcdsaPublicKey::new(bytes.into(), curve))
    }

    /// Key family name for diagnostics
    pub fn key_type(&self) -> String {
        match self {
            PublicKey::Rsa(_) => "RSA".to_string(),
            PublicKey::Ecdsa(key) => key.curve().key_type().to_string(),
        }
    }
}

/// RSA public key bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// ECDSA curve identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1)
    P256,
    /// P-384 (secp384r1)
    P384,
    /// P-521 (secp521r1)
    P521,
}

impl EcdsaCurve {
    /// Length of one scalar (R or S) in the JWS raw signature
    pub const fn scalar_len(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 32,
            EcdsaCurve::P384 => 48,
            EcdsaCurve::P521 => 66,
        }
    }

    /// Key family name for diagnostics, e.g. `"ECDSA P-256"`
    pub const fn key_type(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "ECDSA P-256",
            EcdsaCurve::P384 => "ECDSA P-384",
            EcdsaCurve::P521 => "ECDSA P-521",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "P-256",
            EcdsaCurve::P384 => "P-384",
            EcdsaCurve::P521 => "P-521",
        }
    }
}

impl std::fmt::Display for EcdsaCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ECDSA public key bytes tagged with their curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaPublicKey {
    bytes: Vec<u8>,
    curve: EcdsaCurve,
}

impl EcdsaPublicKey {
    pub fn new(bytes: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { bytes, curve }
    }

    /// Get the encoded key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}
