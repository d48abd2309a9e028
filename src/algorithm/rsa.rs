use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::PublicKey;

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// RS256 algorithm (RSASSA-PKCS1-v1_5 with SHA-256)
pub struct RS256;

impl Algorithm for RS256 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS256
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &PublicKey) -> Result<()> {
        let PublicKey::Rsa(rsa_key) = key else {
            return Err(Error::KeyTypeMismatch {
                algorithm: self.id(),
                expected: "RSA",
                actual: key.key_type(),
            });
        };

        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

/// Generic RSA signature verification
///
/// PKCS#1 v1.5 signatures are already in the shape the primitive expects, so
/// the bytes go through untouched.
fn verify_rsa(
    signing_input: &[u8],
    signature: &[u8],
    public_key_der: &[u8],
    algorithm: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    UnparsedPublicKey::new(algorithm, public_key_der)
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::EcdsaCurve;
    use aws_lc_rs::rand::SystemRandom;
    use aws_lc_rs::signature::{KeyPair, RsaKeyPair, RSA_PKCS1_SHA256};
    use rsa::{pkcs8::EncodePrivateKey, RsaPrivateKey};

    fn generate_keypair() -> RsaKeyPair {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
        let pkcs8_doc = private_key
            .to_pkcs8_der()
            .expect("Failed to serialize to PKCS#8");
        RsaKeyPair::from_pkcs8(pkcs8_doc.as_bytes()).expect("Failed to load key")
    }

    fn sign(keypair: &RsaKeyPair, data: &[u8]) -> Vec<u8> {
        let rng = SystemRandom::new();
        let mut signature = vec![0u8; keypair.public_modulus_len()];
        keypair
            .sign(&RSA_PKCS1_SHA256, &rng, data, &mut signature)
            .expect("Signing failed");
        signature
    }

    #[test]
    fn test_rs256_signatures() {
        let keypair = generate_keypair();
        let key = PublicKey::rsa(keypair.public_key().as_ref().to_vec());

        let signing_input = b"eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";
        let signature = sign(&keypair, signing_input);

        assert!(RS256.verify(signing_input, &signature, &key).is_ok());

        // Wrong message
        assert!(matches!(
            RS256.verify(b"eyJhbGciOiJSUzI1NiJ9.e30", &signature, &key),
            Err(Error::SignatureInvalid)
        ));

        // Truncated signature
        assert!(matches!(
            RS256.verify(signing_input, &signature[1..], &key),
            Err(Error::SignatureInvalid)
        ));
    }

    #[test]
    fn test_rs256_wrong_key_type() {
        let key = PublicKey::ecdsa(vec![0x04; 65], EcdsaCurve::P256);
        let result = RS256.verify(b"a.b", b"signature", &key);
        assert!(matches!(
            result,
            Err(Error::KeyTypeMismatch {
                algorithm: AlgorithmId::RS256,
                expected: "RSA",
                ..
            })
        ));
    }
}
