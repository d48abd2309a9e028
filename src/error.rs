//! Errors for jwtinspect

use crate::algorithm::AlgorithmId;
use crate::token::Segment;
use thiserror::Error;

/// JWT decoding and verification errors
///
/// Decoding errors (the `Format*` and `Header*` variants) abort token
/// construction. Verification errors are only returned by
/// [`Token::verify_signature`](crate::Token::verify_signature);
/// [`Token::is_signed_by`](crate::Token::is_signed_by) logs them and answers
/// `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: {0}")]
    FormatInvalid(&'static str),

    #[error("Base64URL decoding of {segment} failed: {reason}")]
    FormatInvalidBase64 { segment: Segment, reason: String },

    #[error("JSON parsing of {segment} failed: {reason}")]
    FormatInvalidJson { segment: Segment, reason: String },

    #[error("JWT header is not a JSON object")]
    HeaderNotObject,

    #[error("JWT header has no textual 'alg' field")]
    HeaderMissingAlgorithm,

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    #[error("Algorithm '{0}' is not enabled in this build")]
    AlgorithmNotEnabled(AlgorithmId),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Key type mismatch for algorithm '{algorithm}': expected {expected}, got {actual}")]
    KeyTypeMismatch {
        algorithm: AlgorithmId,
        expected: &'static str,
        actual: String,
    },

    #[error("Malformed signature: {0}")]
    SignatureMalformed(String),

    #[error("Signature verification failed")]
    SignatureInvalid,
}

impl Error {
    /// Whether this error was raised while decoding the token string
    pub fn is_malformed_token(&self) -> bool {
        matches!(
            self,
            Error::FormatInvalid(_)
                | Error::FormatInvalidBase64 { .. }
                | Error::FormatInvalidJson { .. }
                | Error::HeaderNotObject
                | Error::HeaderMissingAlgorithm
        )
    }
}

/// Result type alias for jwtinspect operations
pub type Result<T> = std::result::Result<T, Error>;
