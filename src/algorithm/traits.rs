use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::PublicKey;

/// Core trait that every supported JWS signature algorithm implements
pub trait Algorithm {
    /// The `alg` header value this implementation verifies
    fn id(&self) -> AlgorithmId;

    /// Verify a signature
    ///
    /// # Arguments
    /// * `signing_input` - The exact `header.payload` bytes of the token
    /// * `signature` - The decoded signature segment, in JWS form
    /// * `key` - The candidate public key
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &PublicKey) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureVerifier = Box<dyn Algorithm + Send + Sync>;

/// Get a signature verifier for the given algorithm ID
///
/// Fails with [`Error::AlgorithmNotEnabled`] when the algorithm family was
/// compiled out through Cargo features.
pub fn get_verifier(algorithm: AlgorithmId) -> Result<SignatureVerifier> {
    match algorithm {
        #[cfg(feature = "rsa")]
        AlgorithmId::RS256 => Ok(Box::new(super::rsa::RS256)),

        #[cfg(feature = "ecdsa")]
        AlgorithmId::ES256 => Ok(Box::new(super::ecdsa::ES256)),
        #[cfg(feature = "ecdsa")]
        AlgorithmId::ES384 => Ok(Box::new(super::ecdsa::ES384)),
        #[cfg(feature = "ecdsa")]
        AlgorithmId::ES512 => Ok(Box::new(super::ecdsa::ES512)),

        #[allow(unreachable_patterns)]
        disabled => Err(Error::AlgorithmNotEnabled(disabled)),
    }
}
