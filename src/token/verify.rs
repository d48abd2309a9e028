//! Signature verification for decoded tokens
//!
//! [`Token::verify_signature`] reports why a check failed.
//! [`Token::is_signed_by`] never fails: callers usually probe several
//! candidate keys, so every failure becomes `false` plus a `tracing` warning.

use crate::algorithm;
use crate::error::Result;
use crate::keys::PublicKey;
use crate::token::Token;

impl Token {
    /// Verify the signature against `key`, reporting the failure reason
    ///
    /// The message is always the original signing input, never a
    /// re-serialized header or payload.
    pub fn verify_signature(&self, key: &PublicKey) -> Result<()> {
        algorithm::verify_signature(self.algorithm(), self.signing_input(), self.signature(), key)
    }

    /// Check whether the token was signed by the private half of `key`
    ///
    /// Unsupported algorithms, key/algorithm mismatches, malformed signatures
    /// and cryptographic mismatches all answer `false`; the reason is logged
    /// at `warn` level.
    pub fn is_signed_by(&self, key: &PublicKey) -> bool {
        match self.verify_signature(key) {
            Ok(()) => {
                tracing::debug!(
                    algorithm = self.algorithm(),
                    key_id = ?self.key_id(),
                    key_type = %key.key_type(),
                    "JWT signature verified"
                );
                true
            }
            Err(error) => {
                tracing::warn!(
                    algorithm = self.algorithm(),
                    key_id = ?self.key_id(),
                    key_type = %key.key_type(),
                    %error,
                    "Problem verifying JWT signature"
                );
                false
            }
        }
    }

    /// Check the candidate keys in order, stopping at the first match
    pub fn is_signed_by_any<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a PublicKey>,
    {
        keys.into_iter().any(|key| self.is_signed_by(key))
    }
}
