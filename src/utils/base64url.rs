//! Base64URL decoding per RFC 4648 §5
//!
//! A thin wrapper around the `base64` crate. Every JWT segment goes through
//! the same engine so that format detection and decoding never disagree.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};

/// URL-safe alphabet, trailing padding optional on decode, unused bits in the
/// last symbol ignored
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a Base64URL segment to bytes
///
/// The empty string decodes to an empty byte vector.
pub(crate) fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_LENIENT.decode(input)
}

/// Check whether a segment decodes, without keeping the bytes
pub(crate) fn is_valid(input: &str) -> bool {
    decode_bytes(input).is_ok()
}
