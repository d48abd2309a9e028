//! The decoded, immutable JWT
//!
//! A [`Token`] is built once from the compact serialization and never changes
//! afterwards. Construction fails fast on any structural defect; a malformed
//! token never yields a partial value.

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::token::{is_compatible_format, Segment, TokenHeader};
use crate::utils::base64url;
use serde_json::Value;
use std::str::FromStr;

/// A decoded JWT
///
/// Holds the recognized header fields, the payload tree, the exact signing
/// input and the raw signature bytes. Nothing here has been verified: call
/// [`Token::is_signed_by`] before trusting any claim.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header: TokenHeader,
    payload: Value,
    signing_input: Vec<u8>,
    signature: Vec<u8>,
}

impl Token {
    /// Parse a JWT from its compact serialization
    ///
    /// # Arguments
    /// * `token` - The JWT string in format "header.payload.signature"
    ///
    /// # Example
    /// ```ignore
    /// let token = Token::from_string("eyJ...")?;
    /// println!("kid: {:?}", token.key_id());
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        Self::decode(token).inspect_err(|error| {
            tracing::debug!(%error, "Rejected malformed JWT");
        })
    }

    fn decode(token: &str) -> Result<Self> {
        // The signing input is everything before the last '.', byte for byte
        let signing_input = match token.rfind('.') {
            Some(last_dot) if last_dot > 0 => token.as_bytes()[..last_dot].to_vec(),
            _ => return Err(Error::FormatInvalid("missing '.' in JWT")),
        };

        let mut segments = token.splitn(3, '.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(Error::FormatInvalid("wrong number of '.' in JWT"));
        };
        if signature_b64.contains('.') {
            return Err(Error::FormatInvalid("wrong number of '.' in JWT"));
        }

        let header = TokenHeader::from_json(&decode_json(Segment::Header, header_b64)?)?;
        let payload = decode_json(Segment::Payload, payload_b64)?;
        let signature = decode_segment(Segment::Signature, signature_b64)?;

        Ok(Self {
            header,
            payload,
            signing_input,
            signature,
        })
    }

    /// Structural pre-filter; see [`is_compatible_format`]
    pub fn is_compatible_format(candidate: &str) -> bool {
        is_compatible_format(candidate)
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Algorithm (`alg`) exactly as written in the header
    pub fn algorithm(&self) -> &str {
        self.header.algorithm()
    }

    /// Algorithm (`alg`) parsed against the supported set
    pub fn algorithm_id(&self) -> Result<AlgorithmId> {
        self.header.algorithm().parse()
    }

    /// Token type (`typ`)
    pub fn token_type(&self) -> Option<&str> {
        self.header.token_type()
    }

    /// Key ID (`kid`), a hint for choosing the verification key
    pub fn key_id(&self) -> Option<&str> {
        self.header.key_id()
    }

    /// The decoded payload, whatever JSON value it is
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The bytes the signature covers (`header.payload` as received)
    pub fn signing_input(&self) -> &[u8] {
        &self.signing_input
    }

    /// The decoded signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        Token::from_string(token)
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;

    fn try_from(token: &str) -> Result<Self> {
        Token::from_string(token)
    }
}

fn decode_segment(segment: Segment, encoded: &str) -> Result<Vec<u8>> {
    base64url::decode_bytes(encoded).map_err(|e| Error::FormatInvalidBase64 {
        segment,
        reason: e.to_string(),
    })
}

fn decode_json(segment: Segment, encoded: &str) -> Result<Value> {
    let bytes = decode_segment(segment, encoded)?;
    serde_json::from_slice(&bytes).map_err(|e| Error::FormatInvalidJson {
        segment,
        reason: e.to_string(),
    })
}
