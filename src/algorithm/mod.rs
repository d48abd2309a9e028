//! Algorithm support for JWT signature verification
//!
//! The supported set is closed: RS256, ES256, ES384 and ES512. Anything else in
//! a token's `alg` header parses to [`Error::AlgorithmUnsupported`] rather than
//! a generic failure.

mod traits;

#[cfg(feature = "rsa")]
pub mod rsa;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

pub use traits::{get_verifier, Algorithm, SignatureVerifier};

use crate::error::{Error, Result};
use crate::keys::PublicKey;
use std::str::FromStr;

/// Algorithm identifier from the JWT header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,

    /// ECDSA with P-256 and SHA-256
    ES256,

    /// ECDSA with P-384 and SHA-384
    ES384,

    /// ECDSA with P-521 and SHA-512
    ES512,
}

/// Message digest applied to the signing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

/// Signature scheme family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5; signature bytes are used as-is
    RsaPkcs1v15,

    /// ECDSA; JWS raw `R || S` signatures are transcoded to DER first
    Ecdsa,
}

impl AlgorithmId {
    /// All supported algorithms, in table order
    pub const ALL: [AlgorithmId; 4] = [
        AlgorithmId::RS256,
        AlgorithmId::ES256,
        AlgorithmId::ES384,
        AlgorithmId::ES512,
    ];

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::ES256 => "ES256",
            AlgorithmId::ES384 => "ES384",
            AlgorithmId::ES512 => "ES512",
        }
    }

    pub const fn digest(&self) -> DigestAlgorithm {
        match self {
            AlgorithmId::RS256 | AlgorithmId::ES256 => DigestAlgorithm::Sha256,
            AlgorithmId::ES384 => DigestAlgorithm::Sha384,
            AlgorithmId::ES512 => DigestAlgorithm::Sha512,
        }
    }

    pub const fn scheme(&self) -> SignatureScheme {
        match self {
            AlgorithmId::RS256 => SignatureScheme::RsaPkcs1v15,
            AlgorithmId::ES256 | AlgorithmId::ES384 | AlgorithmId::ES512 => {
                SignatureScheme::Ecdsa
            }
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Err(Error::AlgorithmNoneRejected),
            "RS256" => Ok(AlgorithmId::RS256),
            "ES256" => Ok(AlgorithmId::ES256),
            "ES384" => Ok(AlgorithmId::ES384),
            "ES512" => Ok(AlgorithmId::ES512),
            _ => Err(Error::AlgorithmUnsupported(s.to_string())),
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Verify `signature` over `signing_input` for the raw `alg` header value
pub(crate) fn verify_signature(
    algorithm: &str,
    signing_input: &[u8],
    signature: &[u8],
    key: &PublicKey,
) -> Result<()> {
    let algorithm: AlgorithmId = algorithm.parse()?;
    get_verifier(algorithm)?.verify(signing_input, signature, key)
}
