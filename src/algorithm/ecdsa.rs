use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, PublicKey};
use crate::utils::der::ecdsa_signature_to_der;

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

/// ES512 algorithm (ECDSA with P-521 and SHA-512)
pub struct ES512;

impl Algorithm for ES256 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::ES256
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &PublicKey) -> Result<()> {
        verify_ecdsa(
            self.id(),
            EcdsaCurve::P256,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P256_SHA256_ASN1,
        )
    }
}

impl Algorithm for ES384 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::ES384
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &PublicKey) -> Result<()> {
        verify_ecdsa(
            self.id(),
            EcdsaCurve::P384,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P384_SHA384_ASN1,
        )
    }
}

impl Algorithm for ES512 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::ES512
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &PublicKey) -> Result<()> {
        verify_ecdsa(
            self.id(),
            EcdsaCurve::P521,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P521_SHA512_ASN1,
        )
    }
}

/// Generic ECDSA signature verification
///
/// The token carries `R || S` (RFC 7518 §3.4); it is checked against the
/// curve width and transcoded to DER before reaching the `*_ASN1` primitive.
fn verify_ecdsa(
    algorithm: AlgorithmId,
    curve: EcdsaCurve,
    signing_input: &[u8],
    signature: &[u8],
    key: &PublicKey,
    verification: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    let ecdsa_key = match key {
        PublicKey::Ecdsa(ecdsa_key) if ecdsa_key.curve() == curve => ecdsa_key,
        _ => {
            return Err(Error::KeyTypeMismatch {
                algorithm,
                expected: curve.key_type(),
                actual: key.key_type(),
            })
        }
    };

    let expected_len = 2 * curve.scalar_len();
    if signature.len() != expected_len {
        return Err(Error::SignatureMalformed(format!(
            "{algorithm} signature must be {expected_len} bytes, got {}",
            signature.len()
        )));
    }

    let der = ecdsa_signature_to_der(signature)?;

    UnparsedPublicKey::new(verification, ecdsa_key.as_bytes())
        .verify(signing_input, &der)
        .map_err(|_| Error::SignatureInvalid)
}
